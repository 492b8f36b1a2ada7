//! Noyau de calcul infixe
//!
//! Organisation interne :
//! - registre.rs : opérateurs/fonctions (précédence, arité, calcul)
//! - jetons.rs   : normalisation + tokenisation (moins unaire)
//! - rpn.rs      : shunting-yard + évaluation de la RPN
//! - eval.rs     : pipeline complet
//! - erreur.rs   : erreurs typées

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod registre;
pub mod rpn;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ExprError;
pub use eval::evaluate;
