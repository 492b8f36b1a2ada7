// src/noyau/registre.rs
//
// Registre des opérateurs et fonctions.
// Table fermée : ajouter une entrée = ajouter une variante, le compilateur
// signale chaque `match` à compléter.

use super::erreur::{ExprError, ExprResult};

/// Base du logarithme de la touche `log`.
const BASE_LOG: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    Log,
    Sin,
    Cos,
}

/// Toutes les entrées, dans l’ordre d’affichage.
pub const OPERATEURS: [Operateur; 8] = [
    Operateur::Plus,
    Operateur::Moins,
    Operateur::Fois,
    Operateur::Divise,
    Operateur::Puissance,
    Operateur::Log,
    Operateur::Sin,
    Operateur::Cos,
];

impl Operateur {
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Divise => "/",
            Operateur::Puissance => "^",
            Operateur::Log => "log",
            Operateur::Sin => "sin",
            Operateur::Cos => "cos",
        }
    }

    /// Plus grand = lie plus fort. Les fonctions passent devant tout binaire.
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
            Operateur::Puissance => 3,
            Operateur::Log | Operateur::Sin | Operateur::Cos => 10,
        }
    }

    pub fn arite(self) -> usize {
        match self {
            Operateur::Log | Operateur::Sin | Operateur::Cos => 1,
            _ => 2,
        }
    }

    /// Vrai pour les fonctions unaires (sin, cos, log).
    pub fn est_fonction(self) -> bool {
        self.arite() == 1
    }

    /// Applique l’opérateur à `args` (ordre gauche → droite).
    ///
    /// `args.len()` doit valoir `self.arite()` ; sinon `StackUnderflow`.
    /// Tout résultat infini ou NaN est refusé.
    pub fn appliquer(self, args: &[f64]) -> ExprResult<f64> {
        let v = match (self, args) {
            (Operateur::Plus, [a, b]) => a + b,
            (Operateur::Moins, [a, b]) => a - b,
            (Operateur::Fois, [a, b]) => a * b,
            (Operateur::Divise, [_, b]) if *b == 0.0 => return Err(ExprError::DivisionByZero),
            (Operateur::Divise, [a, b]) => a / b,
            (Operateur::Puissance, [a, b]) => a.powf(*b),
            (Operateur::Log, [x]) => x.ln() / BASE_LOG.ln(),
            (Operateur::Sin, [x]) => x.sin(),
            (Operateur::Cos, [x]) => x.cos(),
            _ => return Err(ExprError::StackUnderflow(self.symbole())),
        };

        if v.is_finite() {
            Ok(v)
        } else {
            Err(ExprError::NonFiniteResult(self.symbole()))
        }
    }
}

/// Cherche un opérateur par son symbole exact.
pub fn lookup(nom: &str) -> Option<Operateur> {
    OPERATEURS.iter().copied().find(|op| op.symbole() == nom)
}

/// Contrat du registre ; le tokenizer passe directement par `lookup`.
#[cfg_attr(not(test), allow(dead_code))]
pub fn is_operator(nom: &str) -> bool {
    lookup(nom).is_some()
}

pub fn is_parenthesis(c: char) -> bool {
    c == '(' || c == ')'
}

/// Vrai si `tampon` peut encore devenir un symbole connu en ajoutant des caractères.
pub fn is_prefix(tampon: &str) -> bool {
    OPERATEURS.iter().any(|op| op.symbole().starts_with(tampon))
        || (tampon.chars().count() == 1 && tampon.chars().all(is_parenthesis))
}
