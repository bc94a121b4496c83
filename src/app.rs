// src/app.rs
//
// Calculatrice chaînée — module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat, vue, preferences, son)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier est lu dans vue.rs (coupé quand un champ texte a le focus).
// - Seules les préférences sont sauvegardées ; l’historique vit le temps de la session.

pub mod etat;
pub mod preferences;
pub mod son;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.preferences.theme.visuals());
        self.ui(ctx); // méthode publique (dans vue.rs)
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.preferences.sauver(storage);
    }
}
