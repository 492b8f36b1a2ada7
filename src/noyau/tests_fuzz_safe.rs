//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : une entrée bien formée ne vide jamais la pile,
//!   seules les erreurs arithmétiques sont acceptées

use std::time::{Duration, Instant};

use super::{evaluate, ExprError};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &ExprError) -> bool {
    // Liste blanche : une expression bien formée ne peut échouer
    // que sur l’arithmétique.
    matches!(e, ExprError::DivisionByZero | ExprError::NonFiniteResult(_))
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // littéraux canoniques, incluant 0 (utile pour la division)
    let n = match rng.pick(8) {
        0 => "0",
        1 => "1",
        2 => "2",
        3 => "3",
        4 => "0.5",
        5 => "12",
        6 => "2.25",
        _ => "7",
    };
    if rng.pick(4) == 0 {
        format!("-{n}").replace("-0", "0")
    } else {
        n.to_string()
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let op = ["+", "-", "*", "/", "^"][rng.pick(5) as usize];
    match rng.pick(6) {
        0 => gen_nombre(rng),
        1 | 2 => format!("{}{op}{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}{op}{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => {
            let f = ["sin", "cos", "log"][rng.pick(3) as usize];
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
        _ => {
            // espaces et majuscules au hasard, hors littéraux
            let e = gen_expr(rng, depth - 1);
            if rng.coin() {
                format!(" ( {e} ) ")
            } else {
                format!("COS({e})")
            }
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_jamais_de_pile_vide() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        match evaluate(&expr) {
            Ok(v) => {
                assert!(v.is_finite(), "résultat non fini: expr={expr:?} v={v}");
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // Même seed => mêmes expressions => mêmes sorties
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = a.clone();

    for _ in 0..100 {
        budget(t0, max);

        let ea = gen_expr(&mut a, 3);
        let eb = gen_expr(&mut b, 3);
        assert_eq!(ea, eb);
        assert_eq!(evaluate(&ea), evaluate(&eb), "expr={ea:?}");
    }
}

#[test]
fn fuzz_safe_caracteres_au_hasard() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // Entrées arbitraires : jamais de panique, toujours une valeur finie ou une erreur.
    let alphabet: Vec<char> = "0123456789.+-*/^()sincolgx ".chars().collect();
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..500 {
        budget(t0, max);

        let len = rng.pick(16) as usize;
        let s: String = (0..len)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        if let Ok(v) = evaluate(&s) {
            assert!(v.is_finite(), "résultat non fini: s={s:?}");
        }
    }
}

#[test]
fn fuzz_safe_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let n = 2000;
    let expr = format!("{}1{}", "(".repeat(n), "+1)".repeat(n));
    budget(t0, max);

    let v = evaluate(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, (n + 1) as f64);
    budget(t0, max);
}
