//! src/app/preferences.rs
//!
//! Préférences d’affichage et de son, conservées entre deux lancements
//! via le stockage eframe (fichier en natif, localStorage en web).
//!
//! L’historique n’est PAS conservé : il vit le temps d’une session.

use eframe::egui;
use serde::{Deserialize, Serialize};

use super::son::ProfilSon;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Sombre,
    Clair,
}

impl Theme {
    pub fn basculer(self) -> Self {
        match self {
            Theme::Sombre => Theme::Clair,
            Theme::Clair => Theme::Sombre,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Sombre => egui::Visuals::dark(),
            Theme::Clair => egui::Visuals::light(),
        }
    }

    /// Libellé du bouton : le thème vers lequel on bascule.
    pub fn libelle_bascule(self) -> &'static str {
        match self {
            Theme::Sombre => "☀ Clair",
            Theme::Clair => "🌙 Sombre",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub son_actif: bool,
    pub profil_son: ProfilSon,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Sombre,
            son_actif: true,
            profil_son: ProfilSon::default(),
        }
    }
}

impl Preferences {
    /// Relit les préférences ; valeurs par défaut si absentes ou illisibles.
    pub fn charger(storage: Option<&dyn eframe::Storage>) -> Self {
        let prefs = storage
            .and_then(|s| eframe::get_value::<Preferences>(s, eframe::APP_KEY))
            .unwrap_or_default();
        tracing::debug!(?prefs, "préférences chargées");
        prefs
    }

    pub fn sauver(&self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
