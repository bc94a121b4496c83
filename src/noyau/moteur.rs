//! Moteur d’expression chaînée (cœur de la calculatrice).
//!
//! Rôle : accumuler, touche par touche, une chaîne “2 + 3 + 4 =” et son total.
//!
//! Contrats :
//! - Évaluation strictement de gauche à droite (aucune priorité d’opérateurs).
//! - `operation` est définie SSI `precedent` est non vide (posés / effacés ensemble).
//! - `Phase::Finalise` = calcul clos : la prochaine saisie de chiffre repart de zéro.
//! - Saisie maladroite => no-op silencieux, l’état précédent est conservé.
//! - Résultats arrondis à 12 chiffres significatifs (bruit binaire effacé).

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use super::erreur::ErreurCalc;
use super::format::format_nombre;
use super::historique::{EntreeHistorique, Historique};
use super::nombre::{arrondir_significatif, nombre_vers_texte, parse_float};

/// Précision des résultats (chiffres significatifs).
const CHIFFRES_SIGNIFICATIFS: usize = 12;

/// Suffixe d’une expression close.
const MARQUE_FINALE: &str = " =";

/* ------------------------ Opérateurs ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Addition,
        Operateur::Soustraction,
        Operateur::Multiplication,
        Operateur::Division,
    ];

    /// Symbole affiché dans l’expression.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "-",
            Operateur::Multiplication => "×",
            Operateur::Division => "÷",
        }
    }

    /// Division par zéro non piégée : ±∞ ou NaN (IEEE-754).
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Addition => a + b,
            Operateur::Soustraction => a - b,
            Operateur::Multiplication => a * b,
            Operateur::Division => a / b,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

impl FromStr for Operateur {
    type Err = ErreurCalc;

    /// Accepte les symboles affichés et les alias clavier (`*`, `/`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operateur::Addition),
            "-" | "−" => Ok(Operateur::Soustraction),
            "×" | "*" => Ok(Operateur::Multiplication),
            "÷" | "/" => Ok(Operateur::Division),
            autre => Err(ErreurCalc::OperateurInconnu(autre.to_string())),
        }
    }
}

/* ------------------------ État ------------------------ */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Chaîne en cours de construction.
    #[default]
    Saisie,
    /// Résultat affiché, expression suffixée par " =".
    Finalise,
}

/// Ce que la vue affiche (lecture seule).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projection {
    /// Opérande courant formaté.
    pub principal: String,
    /// Ligne secondaire : expression en cours ou “précédent op”.
    pub secondaire: String,
    /// 😊 calcul clos, 🤔 en cours, vide au repos.
    pub indicateur: &'static str,
}

#[derive(Clone, Debug, Default)]
pub struct Moteur {
    courant: String,
    precedent: String,
    operation: Option<Operateur>,
    expression: String,
    phase: Phase,
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn courant(&self) -> &str {
        &self.courant
    }

    pub fn precedent(&self) -> &str {
        &self.precedent
    }

    pub fn operation(&self) -> Option<Operateur> {
        self.operation
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /* ------------------------ Actions ------------------------ */

    /// Chiffre ou point. Après un calcul clos, repart d’une chaîne vierge.
    /// Un second point dans le même opérande est refusé.
    pub fn ajouter_chiffre(&mut self, jeton: char) {
        if !(jeton.is_ascii_digit() || jeton == '.') {
            trace!(?jeton, "jeton ignoré");
            return;
        }

        if self.phase == Phase::Finalise {
            self.tout_effacer();
        }

        if jeton == '.' && self.courant.contains('.') {
            trace!("second point refusé");
            return;
        }

        self.courant.push(jeton);
    }

    /// Opérateur. En chaîne (un précédent existe déjà), replie d’abord le total.
    pub fn choisir_operateur(&mut self, op: Operateur) {
        if self.courant.is_empty() {
            trace!(%op, "opérateur sans opérande, ignoré");
            return;
        }

        // L’expression montre l’opérande tel que saisi, pas le total replié.
        let saisi = self.courant.clone();

        if !self.precedent.is_empty() && !self.replier() {
            trace!(%op, "opérandes illisibles, opérateur ignoré");
            return;
        }

        if self.phase == Phase::Finalise || self.expression.is_empty() {
            self.expression = format!("{saisi} {op}");
        } else {
            self.expression.push_str(&format!(" {saisi} {op}"));
        }

        self.operation = Some(op);
        self.precedent = std::mem::take(&mut self.courant);
        self.phase = Phase::Saisie;
    }

    /// "=" : clôt la chaîne et dépose (expression, résultat) dans l’historique.
    ///
    /// Un "=" répété sur un calcul clos reporte le résultat dans l’expression
    /// ("2 + 3 = 5 =") et l’inscrit de nouveau, sans rien replier.
    pub fn evaluer(&mut self, historique: &mut Historique) {
        if self.operation.is_none() && self.expression.is_empty() {
            trace!("rien à évaluer");
            return;
        }

        if self.courant.is_empty() {
            let Some(op) = self.operation else {
                trace!("opérande effacé, rien à évaluer");
                return;
            };
            // "=" juste après un opérateur : on retire l’opérateur final,
            // le total courant devient le résultat.
            let texte = self.expression.trim();
            let texte = texte.strip_suffix(op.symbole()).unwrap_or(texte).trim();
            self.expression = texte.to_string();
            self.courant = std::mem::take(&mut self.precedent);
            self.operation = None;

            historique.ajouter(EntreeHistorique::new(
                self.expression.clone(),
                self.courant.clone(),
            ));
            self.expression.push_str(MARQUE_FINALE);
            self.phase = Phase::Finalise;
            debug!(resultat = %self.courant, "évaluation (opérateur final retiré)");
            return;
        }

        let saisi = self.courant.clone();
        let precedent = self.precedent.clone();
        let operation = self.operation;

        if operation.is_some() && !self.replier() {
            trace!("opérandes illisibles, évaluation ignorée");
            return;
        }

        let expression_historique = match operation {
            Some(op) if self.expression.is_empty() => format!("{precedent} {op} {saisi}"),
            _ => format!("{} {saisi}", self.expression),
        };
        self.expression = format!("{expression_historique}{MARQUE_FINALE}");
        self.phase = Phase::Finalise;

        debug!(expression = %expression_historique, resultat = %self.courant, "évaluation");
        historique.ajouter(EntreeHistorique::new(
            expression_historique,
            self.courant.clone(),
        ));
    }

    /// Retire le dernier caractère de l’opérande courant.
    pub fn effacer_dernier(&mut self) {
        self.courant.pop();
    }

    /// Retour à l’état initial (idempotent).
    pub fn tout_effacer(&mut self) {
        self.courant.clear();
        self.precedent.clear();
        self.operation = None;
        self.expression.clear();
        self.phase = Phase::Saisie;
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn projeter(&self) -> Projection {
        let secondaire = if !self.expression.is_empty() {
            self.expression.clone()
        } else if let Some(op) = self.operation {
            format!("{} {op}", self.precedent)
        } else {
            String::new()
        };

        let indicateur = match self.phase {
            Phase::Finalise => "😊",
            Phase::Saisie if !self.courant.is_empty() || self.operation.is_some() => "🤔",
            Phase::Saisie => "",
        };

        Projection {
            principal: format_nombre(&self.courant),
            secondaire,
            indicateur,
        }
    }

    /* ------------------------ Repli ------------------------ */

    /// `precedent op courant` -> `courant` (arrondi), puis efface op/précédent.
    /// Renvoie false sans rien toucher si un opérande est illisible.
    fn replier(&mut self) -> bool {
        let (Some(op), Some(a), Some(b)) = (
            self.operation,
            parse_float(&self.precedent),
            parse_float(&self.courant),
        ) else {
            return false;
        };

        let resultat = arrondir_significatif(op.appliquer(a, b), CHIFFRES_SIGNIFICATIFS);
        debug!(a, b, resultat, operateur = %op, "repli");

        self.courant = nombre_vers_texte(resultat);
        self.operation = None;
        self.precedent.clear();
        true
    }
}
