// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Historique en haut, saisie courante en dessous, pavé en bas
// - Chaque bouton produit une `Touche` : aucune logique de calcul ici
//
// Note :
// - Le clavier physique est traité dans app.rs (avant la vue)

use eframe::egui;

use super::etat::Touche;
use super::AppCalc;
use crate::noyau::registre::Operateur;

/// Pavé : une ligne par rangée de boutons (la dernière n’en a que quatre).
const PAVE: [&[Touche]; 5] = [
    &[
        Touche::Op(Operateur::Sin),
        Touche::Op(Operateur::Cos),
        Touche::Op(Operateur::Log),
        Touche::ToutEffacer,
        Touche::Effacer,
    ],
    &[
        Touche::Chiffre(7),
        Touche::Chiffre(8),
        Touche::Chiffre(9),
        Touche::ParOuvrante,
        Touche::ParFermante,
    ],
    &[
        Touche::Chiffre(4),
        Touche::Chiffre(5),
        Touche::Chiffre(6),
        Touche::Op(Operateur::Fois),
        Touche::Op(Operateur::Divise),
    ],
    &[
        Touche::Chiffre(1),
        Touche::Chiffre(2),
        Touche::Chiffre(3),
        Touche::Op(Operateur::Plus),
        Touche::Op(Operateur::Moins),
    ],
    &[
        Touche::Chiffre(0),
        Touche::Point,
        Touche::Op(Operateur::Puissance),
        Touche::Egal,
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading(crate::TITRE_APP);
        ui.add_space(6.0);

        self.ui_historique(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_saisie(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_historique(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .max_height(240.0)
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for ligne in &self.etat.historique {
                    ui.monospace(ligne.to_string());
                }
            });
    }

    fn ui_saisie(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(ui.text_style_height(&egui::TextStyle::Monospace) * 1.5);
                ui.monospace(self.etat.saisie());
            });

        if let Some(msg) = &self.etat.erreur {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, msg);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let mut appui = None;

        egui::Grid::new("pave_calc")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for &touche in rangee {
                        let resp = ui.add_sized([56.0, 36.0], egui::Button::new(touche.libelle()));
                        if resp.clicked() {
                            appui = Some(touche);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(touche) = appui {
            self.appuyer(touche);
        }
    }
}
