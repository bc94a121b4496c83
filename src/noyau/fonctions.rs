// src/noyau/fonctions.rs
//
// Fonctions annexes (fenêtre “fonctions”) : pures, sans état, indépendantes du moteur.
// Chaque fonction renvoie un texte prêt à afficher ; les erreurs de domaine
// (racine négative, division par zéro, non-entier) sont des messages, pas des Err.

use num_traits::ToPrimitive;

use super::erreur::ErreurCalc;
use super::format::format_valeur;
use super::historique::EntreeHistorique;
use super::nombre::{arrondir_significatif, nombre_vers_texte};

/// Même précision que le moteur pour racines et pourcentages.
const CHIFFRES_SIGNIFICATIFS: usize = 12;

const MSG_DIVISION_ZERO: &str = "Division par zéro impossible";

/// Lecture arrondie puis formatée (racines, pourcentages).
fn arrondi_formate(x: f64) -> String {
    format_valeur(arrondir_significatif(x, CHIFFRES_SIGNIFICATIFS))
}

fn est_entier(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

fn non_entier(n: f64) -> String {
    format!("{} n’est pas un entier", nombre_vers_texte(n))
}

/* ------------------------ Fonctions ------------------------ */

pub fn parite(n: f64) -> String {
    if !est_entier(n) {
        return non_entier(n);
    }
    let t = nombre_vers_texte(n);
    if n % 2.0 == 0.0 {
        format!("{t} est pair")
    } else {
        format!("{t} est impair")
    }
}

pub fn carre(n: f64) -> String {
    format!("{}² = {}", nombre_vers_texte(n), format_valeur(n * n))
}

pub fn cube(n: f64) -> String {
    format!("{}³ = {}", nombre_vers_texte(n), format_valeur(n * n * n))
}

pub fn racine_carree(n: f64) -> String {
    if n < 0.0 {
        return "Impossible de calculer la racine carrée d’un nombre négatif".to_string();
    }
    format!("√{} = {}", nombre_vers_texte(n), arrondi_formate(n.sqrt()))
}

/// Définie aussi pour les négatifs (∛-8 = -2).
pub fn racine_cubique(n: f64) -> String {
    format!("∛{} = {}", nombre_vers_texte(n), arrondi_formate(n.cbrt()))
}

/// Table de 1 à 10, une ligne par produit.
pub fn table_multiplication(n: f64) -> String {
    let t = nombre_vers_texte(n);
    let mut sortie = format!("Table de multiplication de {t} :");
    for i in 1..=10 {
        sortie.push_str(&format!("\n{t} × {i} = {}", format_valeur(n * f64::from(i))));
    }
    sortie
}

/// Division par essais (diviseurs impairs jusqu’à √n) ; pairs > 2 rejetés d’emblée.
pub fn verifier_premier(n: f64) -> String {
    if !est_entier(n) {
        return non_entier(n);
    }
    let t = nombre_vers_texte(n);
    if n < 2.0 {
        return format!("{t} n’est PAS un nombre premier");
    }
    if n == 2.0 {
        return format!("{t} est un nombre PREMIER ✓");
    }
    // Tout flottant >= 2^53 est pair : to_u64 ne peut échouer que pour des pairs.
    let entier = match n.to_u64() {
        Some(e) if e % 2 != 0 => e,
        _ => return format!("{t} n’est PAS un nombre premier (divisible par 2)"),
    };

    let mut d = 3u64;
    while d * d <= entier {
        if entier % d == 0 {
            return format!("{t} n’est PAS un nombre premier (divisible par {d})");
        }
        d += 2;
    }
    format!("{t} est un nombre PREMIER ✓")
}

/* ------------------------ Pourcentages ------------------------ */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModePourcentage {
    /// Total + partie -> pourcentage.
    #[default]
    PartEnPourcent,
    /// Total + pourcentage -> partie.
    PourcentEnPart,
    /// Partie + pourcentage -> total.
    PartEnTout,
}

impl ModePourcentage {
    pub const TOUS: [ModePourcentage; 3] = [
        ModePourcentage::PartEnPourcent,
        ModePourcentage::PourcentEnPart,
        ModePourcentage::PartEnTout,
    ];

    /// Jetons "1", "2", "3" (numérotation des modes dans la fenêtre).
    pub fn depuis_jeton(jeton: &str) -> Result<Self, ErreurCalc> {
        match jeton.trim() {
            "1" => Ok(ModePourcentage::PartEnPourcent),
            "2" => Ok(ModePourcentage::PourcentEnPart),
            "3" => Ok(ModePourcentage::PartEnTout),
            autre => Err(ErreurCalc::ModeInconnu(autre.to_string())),
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            ModePourcentage::PartEnPourcent => "Total + partie → %",
            ModePourcentage::PourcentEnPart => "Total + % → partie",
            ModePourcentage::PartEnTout => "Partie + % → total",
        }
    }

    /// Indications des deux champs de saisie.
    pub fn indices(self) -> (&'static str, &'static str) {
        match self {
            ModePourcentage::PartEnPourcent => ("Montant total", "Partie"),
            ModePourcentage::PourcentEnPart => ("Montant total", "Pourcentage (%)"),
            ModePourcentage::PartEnTout => ("Partie", "Pourcentage (%)"),
        }
    }
}

/// `a` et `b` selon le mode : (total, partie), (total, %), (partie, %).
pub fn pourcentage(mode: ModePourcentage, a: f64, b: f64) -> String {
    let (ta, tb) = (nombre_vers_texte(a), nombre_vers_texte(b));
    match mode {
        ModePourcentage::PartEnPourcent => {
            if a == 0.0 {
                return MSG_DIVISION_ZERO.to_string();
            }
            format!("{tb} représente {}% de {ta}", arrondi_formate(b / a * 100.0))
        }
        ModePourcentage::PourcentEnPart => {
            format!("{tb}% de {ta} = {}", arrondi_formate(a * b / 100.0))
        }
        ModePourcentage::PartEnTout => {
            if b == 0.0 {
                return MSG_DIVISION_ZERO.to_string();
            }
            format!(
                "Si {ta} représente {tb}%, le total = {}",
                arrondi_formate(a * 100.0 / b)
            )
        }
    }
}

/* ------------------------ Catalogue ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Parite,
    Carre,
    Cube,
    RacineCarree,
    RacineCubique,
    Table,
    Pourcentage,
    Premier,
}

impl Fonction {
    pub const TOUTES: [Fonction; 8] = [
        Fonction::Parite,
        Fonction::Carre,
        Fonction::Cube,
        Fonction::RacineCarree,
        Fonction::RacineCubique,
        Fonction::Table,
        Fonction::Pourcentage,
        Fonction::Premier,
    ];

    pub fn titre(self) -> &'static str {
        match self {
            Fonction::Parite => "Pair ou impair",
            Fonction::Carre => "Carré (x²)",
            Fonction::Cube => "Cube (x³)",
            Fonction::RacineCarree => "Racine carrée (√)",
            Fonction::RacineCubique => "Racine cubique (∛)",
            Fonction::Table => "Table de multiplication",
            Fonction::Pourcentage => "Pourcentage",
            Fonction::Premier => "Nombre premier ?",
        }
    }

    /// Préfixe des lignes d’historique.
    pub fn icone(self) -> &'static str {
        match self {
            Fonction::Parite => "#",
            Fonction::Carre => "x²",
            Fonction::Cube => "x³",
            Fonction::RacineCarree => "√",
            Fonction::RacineCubique => "∛",
            Fonction::Table => "📋",
            Fonction::Pourcentage => "%",
            Fonction::Premier => "P",
        }
    }

    pub fn deux_saisies(self) -> bool {
        self == Fonction::Pourcentage
    }

    /// `b` et `mode` ne servent qu’au pourcentage.
    pub fn calculer(self, a: f64, b: f64, mode: ModePourcentage) -> String {
        match self {
            Fonction::Parite => parite(a),
            Fonction::Carre => carre(a),
            Fonction::Cube => cube(a),
            Fonction::RacineCarree => racine_carree(a),
            Fonction::RacineCubique => racine_cubique(a),
            Fonction::Table => table_multiplication(a),
            Fonction::Pourcentage => pourcentage(mode, a, b),
            Fonction::Premier => verifier_premier(a),
        }
    }

    /// Ligne d’historique d’un calcul annexe :
    /// - résultat = ce qui suit le premier "=", sinon le texte entier
    /// - table : résumé "1-10" ; pourcentage : texte entier
    pub fn entree_historique(self, a: f64, b: f64, texte: &str) -> EntreeHistorique {
        let ta = nombre_vers_texte(a);
        match self {
            Fonction::Table => {
                EntreeHistorique::new(format!("[{}] Table de {ta}", self.icone()), "1-10")
            }
            Fonction::Pourcentage => EntreeHistorique::new(
                format!("[{}] {ta}, {}", self.icone(), nombre_vers_texte(b)),
                texte,
            ),
            _ => {
                let resultat = texte
                    .split_once('=')
                    .map(|(_, apres)| apres.trim())
                    .filter(|r| !r.is_empty())
                    .unwrap_or(texte);
                EntreeHistorique::new(format!("[{}] {ta}", self.icone()), resultat)
            }
        }
    }
}
