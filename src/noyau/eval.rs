//! Noyau — évaluation (pipeline réel)
//!
//! normaliser -> tokenize -> RPN -> valeur
//!
//! Chaque étape rend un `ExprResult` ; la première erreur remonte telle quelle.

use log::{debug, trace};

use super::erreur::ExprResult;
use super::jetons::{format_tokens, normaliser, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue une expression infixe et retourne un nombre fini.
///
/// Sans état : deux appels sur la même entrée donnent le même résultat.
pub fn evaluate(expr_str: &str) -> ExprResult<f64> {
    let s = normaliser(expr_str);

    // 1) Jetons
    let jetons = tokenize(&s)?;
    trace!("jetons: {}", format_tokens(&jetons));

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    debug!("rpn de {s:?}: {}", format_tokens(&rpn));

    // 3) Valeur
    eval_rpn(&rpn)
}
