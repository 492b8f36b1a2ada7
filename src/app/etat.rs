//! src/app/etat.rs
//!
//! État UI (sans vue) + transitions pures.
//!
//! Rôle : contenir l’état de la calculatrice (saisie, historique, erreur)
//! et le faire évoluer touche par touche.
//!
//! Contrats :
//! - `Etat::appliquer` consomme l’état et en rend un nouveau : pas d’état global.
//! - Une seule évaluation, via `noyau::evaluate`, sur la touche "=".
//! - Aucune logique d’affichage egui ici.

use std::fmt;

use log::{info, warn};

use crate::noyau::{self, registre::Operateur};
use crate::reglages::Reglages;

/// Message unique montré à l’utilisateur : le détail part dans le journal.
pub const MESSAGE_ERREUR: &str = "Malformed expression";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// 0..=9
    Chiffre(u8),
    Point,
    /// Binaire (+ - * / ^) ou fonction (sin cos log).
    Op(Operateur),
    ParOuvrante,
    ParFermante,
    Egal,
    /// AC : tout effacer, historique compris
    ToutEffacer,
    /// DEL : retire la dernière touche saisie
    Effacer,
}

impl Touche {
    /// Texte ajouté à la saisie, `None` pour les touches de commande.
    pub fn texte(self) -> Option<String> {
        match self {
            Touche::Chiffre(d) => char::from_digit(u32::from(d), 10).map(String::from),
            Touche::Point => Some(".".into()),
            Touche::Op(op) => Some(op.symbole().into()),
            Touche::ParOuvrante => Some("(".into()),
            Touche::ParFermante => Some(")".into()),
            Touche::Egal | Touche::ToutEffacer | Touche::Effacer => None,
        }
    }

    /// Libellé du bouton.
    pub fn libelle(self) -> String {
        match self {
            Touche::Egal => "=".into(),
            Touche::ToutEffacer => "AC".into(),
            Touche::Effacer => "DEL".into(),
            autre => autre.texte().unwrap_or_default(),
        }
    }

    /// Raccourci clavier : un caractère tapé -> une touche.
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        let t = match c.to_ascii_lowercase() {
            d @ '0'..='9' => Touche::Chiffre(d as u8 - b'0'),
            '.' => Touche::Point,
            '+' => Touche::Op(Operateur::Plus),
            '-' => Touche::Op(Operateur::Moins),
            '*' => Touche::Op(Operateur::Fois),
            '/' => Touche::Op(Operateur::Divise),
            '^' => Touche::Op(Operateur::Puissance),
            's' => Touche::Op(Operateur::Sin),
            'c' => Touche::Op(Operateur::Cos),
            'l' => Touche::Op(Operateur::Log),
            '(' => Touche::ParOuvrante,
            ')' => Touche::ParFermante,
            '=' => Touche::Egal,
            _ => return None,
        };
        Some(t)
    }

    fn est_fonction(self) -> bool {
        matches!(self, Touche::Op(op) if op.est_fonction())
    }
}

/// Une ligne d’historique : expression saisie + résultat arrondi.
#[derive(Clone, Debug, PartialEq)]
pub struct Ligne {
    pub expression: String,
    pub resultat: f64,
}

impl fmt::Display for Ligne {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}     =   {}", self.expression, self.resultat)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Etat {
    /// Saisie courante, une entrée par touche ("sin" et "(" sont distinctes).
    pub affichage: Vec<String>,

    /// Plus ancienne en tête.
    pub historique: Vec<Ligne>,

    /// Vrai juste après "=" (réussi ou non).
    pub vient_d_evaluer: bool,

    pub erreur: Option<String>,
}

impl Etat {
    /// Texte de la saisie, tel qu’envoyé au noyau.
    pub fn saisie(&self) -> String {
        self.affichage.concat()
    }

    /// Transition : applique une touche et rend le nouvel état.
    pub fn appliquer(mut self, touche: Touche, reglages: &Reglages) -> Self {
        match touche {
            Touche::Egal => return self.evaluer(reglages),
            Touche::ToutEffacer => {
                self.affichage.clear();
                self.historique.clear();
            }
            Touche::Effacer => {
                self.affichage.pop();
            }
            saisie => self.inserer(saisie),
        }

        self.vient_d_evaluer = false;
        self.erreur = None;
        self
    }

    fn inserer(&mut self, touche: Touche) {
        let Some(texte) = touche.texte() else {
            return;
        };

        // un chiffre après "=" commence un nouveau calcul
        if self.vient_d_evaluer && matches!(touche, Touche::Chiffre(_)) {
            self.affichage.clear();
        }

        if touche.est_fonction() {
            if self.vient_d_evaluer {
                // la fonction s’applique au résultat précédent : "sin ( ans"
                self.affichage.insert(0, "(".to_string());
                self.affichage.insert(0, texte);
            } else {
                self.affichage.push(texte);
                self.affichage.push("(".to_string());
            }
        } else {
            self.affichage.push(texte);
        }
    }

    fn evaluer(mut self, reglages: &Reglages) -> Self {
        self.vient_d_evaluer = true;

        let expression = self.saisie();
        match noyau::evaluate(&expression) {
            Ok(v) => {
                let resultat = arrondir(v, reglages.decimales);
                info!("{expression} = {resultat}");

                self.historique.push(Ligne {
                    expression,
                    resultat,
                });
                let surplus = self.historique.len().saturating_sub(reglages.historique_max);
                self.historique.drain(..surplus);

                self.affichage = vec![resultat.to_string()];
                self.erreur = None;
            }
            Err(e) => {
                warn!("expression refusée {expression:?}: {e}");
                self.erreur = Some(MESSAGE_ERREUR.to_string());
            }
        }

        self
    }
}

/// Arrondi d’affichage à `decimales` chiffres après la virgule.
///
/// Le résultat se relit toujours comme un littéral canonique : pas de `-0`.
pub fn arrondir(v: f64, decimales: usize) -> f64 {
    let r = format!("{v:.decimales$}").parse::<f64>().unwrap_or(v);
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taper(etat: Etat, touches: &str) -> Etat {
        let reglages = Reglages::default();
        touches.chars().fold(etat, |e, c| {
            let t = Touche::depuis_caractere(c).unwrap_or_else(|| panic!("touche {c:?}"));
            e.appliquer(t, &reglages)
        })
    }

    fn appuyer(etat: Etat, touche: Touche) -> Etat {
        etat.appliquer(touche, &Reglages::default())
    }

    #[test]
    fn saisie_puis_egal() {
        let e = taper(Etat::default(), "2+3*4=");
        assert_eq!(e.affichage, vec!["14"]);
        assert_eq!(e.historique.len(), 1);
        assert_eq!(e.historique[0].to_string(), "2+3*4     =   14");
        assert!(e.vient_d_evaluer);
        assert_eq!(e.erreur, None);
    }

    #[test]
    fn fonction_ajoute_parenthese() {
        let e = taper(Etat::default(), "s0");
        assert_eq!(e.affichage, vec!["sin", "(", "0"]);
        let e = taper(e, ")=");
        assert_eq!(e.affichage, vec!["0"]);
    }

    #[test]
    fn fonction_apres_egal_enveloppe_le_resultat() {
        let e = taper(Etat::default(), "4+4=l");
        assert_eq!(e.affichage, vec!["log", "(", "8"]);
        let e = taper(e, ")=");
        assert_eq!(e.affichage, vec!["3"]);
    }

    #[test]
    fn chiffre_apres_egal_repart_de_zero() {
        let e = taper(Etat::default(), "1+1=7");
        assert_eq!(e.affichage, vec!["7"]);
        assert_eq!(e.historique.len(), 1);
    }

    #[test]
    fn operateur_apres_egal_continue() {
        let e = taper(Etat::default(), "1+1=*3=");
        assert_eq!(e.affichage, vec!["6"]);
        assert_eq!(e.historique[1].expression, "2*3");
    }

    #[test]
    fn erreur_garde_la_saisie() {
        let e = taper(Etat::default(), "5/0=");
        assert_eq!(e.erreur.as_deref(), Some(MESSAGE_ERREUR));
        assert_eq!(e.saisie(), "5/0");
        assert!(e.historique.is_empty());

        // la touche suivante efface le message
        let e = appuyer(e, Touche::Effacer);
        assert_eq!(e.erreur, None);
        assert_eq!(e.saisie(), "5/");
    }

    #[test]
    fn del_retire_une_touche_entiere() {
        let e = taper(Etat::default(), "2*c");
        assert_eq!(e.saisie(), "2*cos(");
        let e = appuyer(e, Touche::Effacer);
        assert_eq!(e.saisie(), "2*cos");
        let e = appuyer(e, Touche::Effacer);
        assert_eq!(e.saisie(), "2*");
        let e = appuyer(appuyer(appuyer(e, Touche::Effacer), Touche::Effacer), Touche::Effacer);
        assert!(e.affichage.is_empty());
    }

    #[test]
    fn ac_vide_tout() {
        let e = taper(Etat::default(), "1+1=2");
        let e = appuyer(e, Touche::ToutEffacer);
        assert_eq!(e, Etat::default());
    }

    #[test]
    fn historique_borne() {
        let mut reglages = Reglages::default();
        reglages.set_historique_max(2);

        let mut e = Etat::default();
        for c in "1=2=3=".chars() {
            let t = Touche::depuis_caractere(c).unwrap();
            e = e.appliquer(t, &reglages);
        }
        let exprs: Vec<&str> = e.historique.iter().map(|l| l.expression.as_str()).collect();
        assert_eq!(exprs, vec!["2", "3"]);
    }

    #[test]
    fn arrondi_six_decimales() {
        assert_eq!(arrondir(1.0 / 3.0, 6), 0.333333);
        assert_eq!(arrondir(2.0_f64.sqrt(), 6), 1.414214);
        assert_eq!(arrondir(-1e-9, 6), 0.0);
        assert!(arrondir(-1e-9, 6).is_sign_positive());

        let e = taper(Etat::default(), "1/3=");
        assert_eq!(e.affichage, vec!["0.333333"]);
    }

    #[test]
    fn resultat_negatif_reutilisable() {
        let e = taper(Etat::default(), "2-5=+1=");
        assert_eq!(e.affichage, vec!["-2"]);
    }

    #[test]
    fn libelles() {
        assert_eq!(Touche::Op(Operateur::Log).libelle(), "log");
        assert_eq!(Touche::Chiffre(7).libelle(), "7");
        assert_eq!(Touche::ToutEffacer.libelle(), "AC");
        assert_eq!(Touche::depuis_caractere('x'), None);
    }
}
