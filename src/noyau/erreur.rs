//! Erreurs typées du noyau.
//!
//! Le noyau ne lève rien pour une saisie maladroite (no-op silencieux).
//! Ces variantes couvrent seulement les chemins `Result` explicites.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    /// Symbole d’opérateur hors de {+, -, ×, ÷} (alias clavier * et / compris).
    #[error("opérateur inconnu : {0:?}")]
    OperateurInconnu(String),

    /// Mode de pourcentage hors de {1, 2, 3}.
    #[error("mode de pourcentage inconnu : {0:?}")]
    ModeInconnu(String),

    #[error("index d’historique hors bornes : {index} (taille {taille})")]
    IndexHistorique { index: usize, taille: usize },
}
