//! src/app/son.rs
//!
//! Retour sonore des touches.
//!
//! - `ProfilSon` choisit un préréglage fixe (forme d’onde + enveloppe).
//! - `Lecteur` joue le clic : Web Audio en wasm32, silencieux en natif.

use serde::{Deserialize, Serialize};

/// Gain visé en fin d’enveloppe (une rampe exponentielle ne peut pas atteindre 0).
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const GAIN_FINAL: f32 = 0.001;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfilSon {
    #[default]
    Clic,
    Pop,
    Bip,
    Tape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormeOnde {
    Sinus,
    Carre,
    Triangle,
}

/// Oscillateur + enveloppe de gain d’un clic.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enveloppe {
    pub forme: FormeOnde,
    /// Hz au départ.
    pub frequence: f32,
    /// Hz visés en fin de clic (rampe exponentielle), `None` = fréquence fixe.
    pub frequence_fin: Option<f32>,
    pub gain: f32,
    /// Secondes.
    pub duree: f64,
}

impl ProfilSon {
    pub const TOUS: [ProfilSon; 4] = [
        ProfilSon::Clic,
        ProfilSon::Pop,
        ProfilSon::Bip,
        ProfilSon::Tape,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            ProfilSon::Clic => "Clic classique",
            ProfilSon::Pop => "Pop doux",
            ProfilSon::Bip => "Bip",
            ProfilSon::Tape => "Tape",
        }
    }

    pub fn enveloppe(self) -> Enveloppe {
        match self {
            ProfilSon::Clic => Enveloppe {
                forme: FormeOnde::Sinus,
                frequence: 800.0,
                frequence_fin: Some(300.0),
                gain: 0.1,
                duree: 0.1,
            },
            ProfilSon::Pop => Enveloppe {
                forme: FormeOnde::Sinus,
                frequence: 400.0,
                frequence_fin: Some(200.0),
                gain: 0.08,
                duree: 0.08,
            },
            ProfilSon::Bip => Enveloppe {
                forme: FormeOnde::Carre,
                frequence: 1000.0,
                frequence_fin: None,
                gain: 0.05,
                duree: 0.05,
            },
            ProfilSon::Tape => Enveloppe {
                forme: FormeOnde::Triangle,
                frequence: 600.0,
                frequence_fin: Some(100.0),
                gain: 0.12,
                duree: 0.06,
            },
        }
    }
}

/* ------------------------ Lecteur ------------------------ */

#[derive(Debug, Default)]
pub struct Lecteur {
    /// Créé au premier clic (politique autoplay des navigateurs).
    #[cfg(target_arch = "wasm32")]
    contexte: Option<web_sys::AudioContext>,
}

impl Lecteur {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn jouer(&mut self, profil: ProfilSon) {
        let env = profil.enveloppe();
        tracing::trace!(
            ?profil,
            frequence = env.frequence,
            duree = env.duree,
            "clic (pas de sortie audio en natif)"
        );
    }

    #[cfg(target_arch = "wasm32")]
    pub fn jouer(&mut self, profil: ProfilSon) {
        if let Err(e) = self.jouer_web(profil) {
            tracing::warn!(?e, "son indisponible");
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn jouer_web(&mut self, profil: ProfilSon) -> Result<(), wasm_bindgen::JsValue> {
        use web_sys::{AudioContext, AudioContextState, OscillatorType};

        let ctx = match &self.contexte {
            Some(c) => c.clone(),
            None => {
                let c = AudioContext::new()?;
                self.contexte = Some(c.clone());
                c
            }
        };
        if ctx.state() == AudioContextState::Suspended {
            let _ = ctx.resume()?;
        }

        let env = profil.enveloppe();
        let osc = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;

        osc.set_type(match env.forme {
            FormeOnde::Sinus => OscillatorType::Sine,
            FormeOnde::Carre => OscillatorType::Square,
            FormeOnde::Triangle => OscillatorType::Triangle,
        });

        let t = ctx.current_time();
        let fin = t + env.duree;
        osc.frequency().set_value_at_time(env.frequence, t)?;
        if let Some(f) = env.frequence_fin {
            osc.frequency().exponential_ramp_to_value_at_time(f, fin)?;
        }
        gain.gain().set_value_at_time(env.gain, t)?;
        gain.gain().exponential_ramp_to_value_at_time(GAIN_FINAL, fin)?;

        osc.start()?;
        osc.stop_with_when(fin)?;
        Ok(())
    }
}
