// src/app.rs
//
// Module App (racine)
// -------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Porter AppCalc : l’état courant + les réglages
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Toute modification de l’état passe par `AppCalc::appuyer`,
//   qui délègue à la transition pure `Etat::appliquer`.

pub mod etat;
pub mod vue;

use eframe::egui;

use crate::reglages::Reglages;
use etat::{Etat, Touche};

#[derive(Debug, Default)]
pub struct AppCalc {
    pub etat: Etat,
    pub reglages: Reglages,
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            etat: Etat::default(),
            reglages,
        }
    }

    pub fn appuyer(&mut self, touche: Touche) {
        let etat = std::mem::take(&mut self.etat);
        self.etat = etat.appliquer(touche, &self.reglages);
    }

    /// Clavier physique -> touches (même effet qu’un clic).
    fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
        ctx.input(|i| Self::touches_depuis_evenements(&i.events))
    }

    fn touches_depuis_evenements(evenements: &[egui::Event]) -> Vec<Touche> {
        evenements
            .iter()
            .filter_map(|ev| match ev {
                egui::Event::Text(t) => Some(t.chars().filter_map(Touche::depuis_caractere).collect()),
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => Some(vec![Touche::Egal]),
                    egui::Key::Backspace => Some(vec![Touche::Effacer]),
                    egui::Key::Escape => Some(vec![Touche::ToutEffacer]),
                    _ => None,
                },
                _ => None,
            })
            .flatten()
            .collect()
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for touche in Self::touches_clavier(ctx) {
            self.appuyer(touche);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
