//! src/app/etat.rs
//!
//! État de session (sans vue).
//!
//! Rôle : posséder le moteur, l’historique, les préférences et la fenêtre “fonctions”,
//! et traduire chaque action discrète (touche, bouton) en appel au noyau.
//!
//! Contrats :
//! - Aucun dessin ici (pas d’egui), tout est testable sans fenêtre.
//! - Une seule instance de moteur par session, passée par référence.
//! - Chaque action utilisateur déclenche le clic sonore (si activé).

use crate::noyau::{
    parse_float, Fonction, Historique, ModePourcentage, Moteur, Operateur, Projection,
};

use super::preferences::Preferences;
use super::son::Lecteur;

/// Action discrète du pavé (bouton ou clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Operateur(Operateur),
    Egal,
    Effacer,
    ToutEffacer,
}

impl Touche {
    /// Caractère tapé au clavier -> touche ("*" et "/" comme alias de × et ÷).
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        match c {
            '0'..='9' | '.' => Some(Touche::Chiffre(c)),
            '=' => Some(Touche::Egal),
            _ => c.to_string().parse().ok().map(Touche::Operateur),
        }
    }
}

/// Fenêtre de saisie d’une fonction annexe.
#[derive(Clone, Debug)]
pub struct DialogueFonction {
    pub fonction: Fonction,
    pub saisie: String,
    /// Second champ (pourcentage seulement).
    pub saisie2: String,
    pub mode: ModePourcentage,
    /// Résultat ou message de validation.
    pub resultat: String,
    /// Demande de focus sur le premier champ (consommée par la vue).
    pub focus: bool,
}

impl DialogueFonction {
    fn new(fonction: Fonction) -> Self {
        Self {
            fonction,
            saisie: String::new(),
            saisie2: String::new(),
            mode: ModePourcentage::default(),
            resultat: String::new(),
            focus: true,
        }
    }

    fn est_vide(&self) -> bool {
        self.saisie.is_empty() && self.saisie2.is_empty() && self.resultat.is_empty()
    }

    fn vider(&mut self) {
        self.saisie.clear();
        self.saisie2.clear();
        self.resultat.clear();
        self.focus = true;
    }
}

#[derive(Debug, Default)]
pub struct AppCalc {
    // --- noyau ---
    pub moteur: Moteur,
    pub historique: Historique,

    // --- paramètres (persistés) ---
    pub preferences: Preferences,

    // --- UX ---
    pub historique_visible: bool,
    pub dialogue: Option<DialogueFonction>,

    lecteur: Lecteur,
}

impl AppCalc {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            moteur: Moteur::new(),
            preferences,
            ..Default::default()
        }
    }

    pub fn projection(&self) -> Projection {
        self.moteur.projeter()
    }

    /// Clic sonore, selon les préférences.
    pub fn cliquer(&mut self) {
        if self.preferences.son_actif {
            self.lecteur.jouer(self.preferences.profil_son);
        }
    }

    /* ------------------------ Pavé ------------------------ */

    pub fn appuyer(&mut self, touche: Touche) {
        self.cliquer();
        match touche {
            Touche::Chiffre(c) => self.moteur.ajouter_chiffre(c),
            Touche::Operateur(op) => self.moteur.choisir_operateur(op),
            Touche::Egal => self.moteur.evaluer(&mut self.historique),
            Touche::Effacer => self.moteur.effacer_dernier(),
            Touche::ToutEffacer => self.moteur.tout_effacer(),
        }
    }

    /* ------------------------ Historique ------------------------ */

    pub fn supprimer_entree(&mut self, index: usize) {
        self.cliquer();
        if let Err(e) = self.historique.supprimer(index) {
            tracing::warn!(%e, "suppression ignorée");
        }
    }

    pub fn vider_historique(&mut self) {
        self.cliquer();
        self.historique.vider();
    }

    /* ------------------------ Réglages ------------------------ */

    pub fn basculer_theme(&mut self) {
        self.cliquer();
        self.preferences.theme = self.preferences.theme.basculer();
    }

    /* ------------------------ Fonctions annexes ------------------------ */

    pub fn ouvrir_fonction(&mut self, fonction: Fonction) {
        self.cliquer();
        self.dialogue = Some(DialogueFonction::new(fonction));
    }

    pub fn fermer_fonction(&mut self) {
        self.cliquer();
        self.dialogue = None;
    }

    /// Changer de mode de pourcentage vide les champs.
    pub fn changer_mode(&mut self, mode: ModePourcentage) {
        if let Some(d) = self.dialogue.as_mut() {
            d.mode = mode;
            d.vider();
        }
    }

    /// Échap : vide les champs, ou ferme la fenêtre s’ils sont déjà vides.
    pub fn echap_fonction(&mut self) {
        let Some(d) = self.dialogue.as_mut() else {
            return;
        };
        if d.est_vide() {
            self.fermer_fonction();
        } else {
            d.vider();
        }
    }

    /// Entrée : valide la saisie, affiche le résultat et l’inscrit à l’historique.
    pub fn valider_fonction(&mut self) {
        self.cliquer();
        let Some(d) = self.dialogue.as_mut() else {
            return;
        };

        let a = parse_float(&d.saisie);
        let b = parse_float(&d.saisie2);

        let (a, b) = match (d.fonction.deux_saisies(), a, b) {
            (true, Some(a), Some(b)) => (a, b),
            (true, _, _) => {
                d.resultat = "Veuillez saisir les deux valeurs".to_string();
                return;
            }
            (false, Some(a), _) => (a, 0.0),
            (false, None, _) => {
                d.resultat = "Veuillez saisir un nombre valide".to_string();
                return;
            }
        };

        let texte = d.fonction.calculer(a, b, d.mode);
        tracing::debug!(fonction = ?d.fonction, a, b, resultat = %texte, "fonction annexe");
        self.historique
            .ajouter(d.fonction.entree_historique(a, b, &texte));
        d.resultat = texte;
    }
}
