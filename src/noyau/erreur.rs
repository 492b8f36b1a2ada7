// src/noyau/erreur.rs
//
// Erreurs du noyau : une variante par cause, jamais de panique.

use thiserror::Error;

/// Résultat de toute étape du pipeline.
pub type ExprResult<T> = Result<T, ExprError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExprError {
    /// Littéral numérique mal formé ou non canonique (`1.2.3`, `01`, `-`).
    #[error("nombre invalide: {0:?}")]
    InvalidNumber(String),

    /// Suite de caractères qui ne peut devenir aucun symbole connu.
    #[error("symbole inconnu: {0:?}")]
    UnknownSymbol(String),

    #[error("parenthèses non appariées")]
    UnmatchedParenthesis,

    /// Un opérateur n’a pas assez d’opérandes sur la pile.
    #[error("opérande manquant pour '{0}'")]
    StackUnderflow(&'static str),

    #[error("division par zéro")]
    DivisionByZero,

    /// La pile finale ne contient pas exactement une valeur.
    #[error("expression mal formée")]
    MalformedExpression,

    /// Résultat infini ou NaN (log(0), log(-1), dépassement de ^).
    #[error("résultat non fini pour '{0}'")]
    NonFiniteResult(&'static str),
}
