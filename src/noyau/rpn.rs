// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), sans aucun calcul
// - Puis évaluer la RPN avec une seule pile de valeurs
//
// Règles:
// - à précédence égale, l’opérateur déjà sur la pile sort d’abord
//   (tout est associatif à gauche, y compris ^ : 2^3^2 = 64)
// - les fonctions (précédence 10) sortent avant tout binaire qui les suit

use super::erreur::{ExprError, ExprResult};
use super::jetons::Tok;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Op(Sin), LPar, Num(0), RPar, Op(Plus), Num(1)]
///   rpn:    [Num(0), Op(Sin), Num(1), Op(Plus)]
pub fn to_rpn(tokens: &[Tok]) -> ExprResult<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for &tok in tokens {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(op) => {
                while let Some(&Tok::Op(top)) = ops.last() {
                    if op.precedence() > top.precedence() {
                        break;
                    }
                    out.push(Tok::Op(top));
                    ops.pop();
                }
                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => loop {
                match ops.pop() {
                    Some(Tok::LPar) => break,
                    Some(top) => out.push(top),
                    // cette ')' n’a pas de '(' correspondante
                    None => return Err(ExprError::UnmatchedParenthesis),
                }
            },
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        match top {
            Tok::Op(_) => out.push(top),
            _ => return Err(ExprError::UnmatchedParenthesis),
        }
    }

    Ok(out)
}

/// Évalue une RPN.
///
/// Ne fait pas confiance à l’appelant : arité, parenthèses égarées et pile
/// finale sont revérifiées.
pub fn eval_rpn(rpn: &[Tok]) -> ExprResult<f64> {
    let mut pile: Vec<f64> = Vec::new();

    for &tok in rpn {
        match tok {
            Tok::Num(v) => pile.push(v),

            Tok::Op(op) => {
                let k = op.arite();
                if pile.len() < k {
                    return Err(ExprError::StackUnderflow(op.symbole()));
                }
                // split_off garde l’ordre gauche -> droite des arguments
                let args = pile.split_off(pile.len() - k);
                pile.push(op.appliquer(&args)?);
            }

            Tok::LPar | Tok::RPar => return Err(ExprError::MalformedExpression),
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(ExprError::MalformedExpression),
    }
}
