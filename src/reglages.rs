//! src/reglages.rs
//!
//! Réglages de l’application : valeurs par défaut + surcharge par variables
//! d’environnement (natif). Toute valeur lue est bornée.

use std::path::PathBuf;

use log::{warn, LevelFilter};

/// Décimales affichées pour un résultat.
const DECIMALES_DEFAUT: usize = 6;

/// Garde-fou : au-delà, f64 n’a plus rien à dire.
const DECIMALES_MAX: usize = 17;

/// Lignes d’historique conservées par défaut.
const HISTORIQUE_DEFAUT: usize = 100;

const HISTORIQUE_MAX: usize = 10_000;

pub const ENV_DECIMALES: &str = "CALC_DECIMALES";
pub const ENV_HISTORIQUE_MAX: &str = "CALC_HISTORIQUE_MAX";
pub const ENV_LOG: &str = "CALC_LOG";
pub const ENV_LOG_FICHIER: &str = "CALC_LOG_FICHIER";

#[derive(Clone, Debug, PartialEq)]
pub struct Reglages {
    /// Arrondi de l’affichage (le noyau calcule toujours en f64 complet).
    pub decimales: usize,
    pub historique_max: usize,
    pub niveau_log: LevelFilter,
    /// Journal fichier en plus du terminal (natif seulement).
    pub fichier_log: Option<PathBuf>,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
            historique_max: HISTORIQUE_DEFAUT,
            niveau_log: LevelFilter::Info,
            fichier_log: None,
        }
    }
}

impl Reglages {
    /// Défauts, puis variables d’environnement.
    pub fn depuis_env() -> Self {
        Self::depuis(|cle| std::env::var(cle).ok())
    }

    /// Même chose avec une source de variables injectée (tests).
    pub fn depuis(lire: impl Fn(&str) -> Option<String>) -> Self {
        let mut r = Self::default();

        if let Some(v) = lire(ENV_DECIMALES) {
            match v.trim().parse::<usize>() {
                Ok(n) => r.set_decimales(n),
                Err(_) => warn!("{ENV_DECIMALES}={v:?} ignoré (entier attendu)"),
            }
        }

        if let Some(v) = lire(ENV_HISTORIQUE_MAX) {
            match v.trim().parse::<usize>() {
                Ok(n) => r.set_historique_max(n),
                Err(_) => warn!("{ENV_HISTORIQUE_MAX}={v:?} ignoré (entier attendu)"),
            }
        }

        if let Some(v) = lire(ENV_LOG) {
            match v.trim().parse::<LevelFilter>() {
                Ok(niveau) => r.niveau_log = niveau,
                Err(_) => warn!("{ENV_LOG}={v:?} ignoré (off/error/warn/info/debug/trace)"),
            }
        }

        if let Some(v) = lire(ENV_LOG_FICHIER) {
            let v = v.trim();
            if !v.is_empty() {
                r.fichier_log = Some(PathBuf::from(v));
            }
        }

        r
    }

    pub fn set_decimales(&mut self, n: usize) {
        self.decimales = n.min(DECIMALES_MAX);
    }

    /// Au moins une ligne : sinon "=" n’aurait aucune trace visible.
    pub fn set_historique_max(&mut self, n: usize) {
        self.historique_max = n.clamp(1, HISTORIQUE_MAX);
    }
}
