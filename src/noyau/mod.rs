//! Noyau de la calculatrice chaînée
//!
//! Organisation interne :
//! - nombre.rs     : texte <-> f64 (lecture tolérante, écriture canonique, arrondi 12 chiffres)
//! - format.rs     : affichage “joli” d’un opérande (1,234.5)
//! - moteur.rs     : machine à états de l’expression chaînée (le cœur)
//! - historique.rs : journal des calculs, le plus récent en tête
//! - fonctions.rs  : fonctions annexes pures (parité, racines, %, premier, table…)
//! - erreur.rs     : erreurs typées des rares chemins `Result`

pub mod erreur;
pub mod fonctions;
pub mod format;
pub mod historique;
pub mod moteur;
pub mod nombre;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use fonctions::{Fonction, ModePourcentage};
pub use historique::Historique;
pub use moteur::{Moteur, Operateur, Projection};
pub use nombre::parse_float;
