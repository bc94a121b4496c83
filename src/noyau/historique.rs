//! Historique des calculs : le plus récent en tête.
//!
//! Taille non bornée : seules les actions explicites (supprimer / vider) retirent des entrées.

use std::collections::VecDeque;

use super::erreur::ErreurCalc;

/// Une ligne d’historique, figée à la création.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    expression: String,
    resultat: String,
}

impl EntreeHistorique {
    pub fn new(expression: impl Into<String>, resultat: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            resultat: resultat.into(),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn resultat(&self) -> &str {
        &self.resultat
    }
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
}

impl Historique {
    /// Insère en position 0.
    pub fn ajouter(&mut self, entree: EntreeHistorique) {
        tracing::debug!(
            expression = entree.expression(),
            resultat = entree.resultat(),
            "historique + 1"
        );
        self.entrees.push_front(entree);
    }

    /// Retire exactement une entrée. Index hors bornes : erreur, historique intact.
    pub fn supprimer(&mut self, index: usize) -> Result<EntreeHistorique, ErreurCalc> {
        let taille = self.entrees.len();
        self.entrees
            .remove(index)
            .ok_or(ErreurCalc::IndexHistorique { index, taille })
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    /// Vue paresseuse, réutilisable (`Clone`), dans l’ordre courant.
    pub fn entrees(&self) -> impl ExactSizeIterator<Item = &EntreeHistorique> + Clone + '_ {
        self.entrees.iter()
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
