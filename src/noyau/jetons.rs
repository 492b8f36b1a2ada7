// src/noyau/jetons.rs

use super::erreur::{ExprError, ExprResult};
use super::registre::{is_parenthesis, is_prefix, lookup, Operateur};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),
    LPar,
    RPar,
}

/// Normalisation avant tokenisation : retire tout blanc, passe en minuscules.
pub fn normaliser(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Tokenize une chaîne déjà normalisée.
///
/// Deux tampons : un pour le littéral numérique en cours, un pour le symbole
/// en cours (`s`, `si`, `sin`...). Le `-` lu quand aucun opérande ne le
/// précède est un signe : il part dans le tampon numérique.
pub fn tokenize(s: &str) -> ExprResult<Vec<Tok>> {
    let mut out = Vec::new();
    let mut nombre = String::new();
    let mut symbole = String::new();

    // vrai juste après un nombre ou ')'
    let mut operande_vu = false;

    for c in s.chars() {
        if c.is_ascii_digit() || c == '.' {
            // un chiffre ne peut pas compléter un symbole entamé ("si2n")
            if !symbole.is_empty() {
                return Err(ExprError::UnknownSymbol(symbole));
            }
            nombre.push(c);
            continue;
        }

        if !nombre.is_empty() {
            out.push(Tok::Num(lire_nombre(&nombre)?));
            nombre.clear();
            operande_vu = true;
        }

        symbole.push(c);

        let tok = if symbole.len() == 1 && is_parenthesis(c) {
            if c == '(' {
                Tok::LPar
            } else {
                Tok::RPar
            }
        } else if let Some(op) = lookup(&symbole) {
            Tok::Op(op)
        } else if is_prefix(&symbole) {
            continue;
        } else {
            return Err(ExprError::UnknownSymbol(symbole));
        };
        symbole.clear();

        match tok {
            Tok::Op(Operateur::Moins) if !operande_vu => nombre.push('-'),
            Tok::RPar => {
                out.push(tok);
                operande_vu = true;
            }
            _ => {
                out.push(tok);
                operande_vu = false;
            }
        }
    }

    if !nombre.is_empty() {
        out.push(Tok::Num(lire_nombre(&nombre)?));
    }
    if !symbole.is_empty() {
        return Err(ExprError::UnknownSymbol(symbole));
    }

    Ok(out)
}

/// Parse un littéral et exige qu’il soit écrit sous sa forme canonique.
///
/// Refuse `1.2.3`, `01`, `1.0`, `.5`, `5.`, `-` et `-0`.
fn lire_nombre(litteral: &str) -> ExprResult<f64> {
    let invalide = || ExprError::InvalidNumber(litteral.to_string());

    let v: f64 = litteral.parse().map_err(|_| invalide())?;
    if forme_canonique(v) != litteral {
        return Err(invalide());
    }
    Ok(v)
}

fn forme_canonique(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        format!("{v}")
    }
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
