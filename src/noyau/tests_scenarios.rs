//! Tests de scénarios : séquences de touches complètes, comme au clavier.
//!
//! Notation des séquences (`taper`) :
//! - chiffres et "."     : ajouter_chiffre
//! - + - * / × ÷         : choisir_operateur
//! - "="                 : evaluer
//! - "<"                 : effacer_dernier
//! - "C"                 : tout_effacer
//! - espaces ignorés

use super::moteur::Phase;
use super::{Historique, Moteur, Operateur};

fn taper(m: &mut Moteur, h: &mut Historique, touches: &str) {
    for c in touches.chars() {
        match c {
            ' ' => {}
            '0'..='9' | '.' => m.ajouter_chiffre(c),
            '=' => m.evaluer(h),
            '<' => m.effacer_dernier(),
            'C' => m.tout_effacer(),
            _ => {
                let op: Operateur = c
                    .to_string()
                    .parse()
                    .unwrap_or_else(|e| panic!("séquence invalide: {e}"));
                m.choisir_operateur(op);
            }
        }
    }
}

fn session(touches: &str) -> (Moteur, Historique) {
    let mut m = Moteur::new();
    let mut h = Historique::default();
    taper(&mut m, &mut h, touches);
    (m, h)
}

fn assert_vierge(m: &Moteur) {
    assert_eq!(m.courant(), "");
    assert_eq!(m.precedent(), "");
    assert_eq!(m.operation(), None);
    assert_eq!(m.expression(), "");
    assert_eq!(m.phase(), Phase::Saisie);
}

/* ------------------------ Chaînage gauche -> droite ------------------------ */

#[test]
fn chainage_gauche_droite() {
    let (m, h) = session("2 + 3 + 4 =");
    assert_eq!(m.courant(), "9");
    assert_eq!(m.expression(), "2 + 3 + 4 =");

    let e = h.entrees().next().unwrap_or_else(|| panic!("historique vide"));
    assert_eq!(e.expression(), "2 + 3 + 4");
    assert_eq!(e.resultat(), "9");
    assert_eq!(h.len(), 1);
}

#[test]
fn pas_de_priorite_operatoire() {
    // (2 + 3) × 4, pas 2 + 12
    let (m, _) = session("2 + 3 × 4 =");
    assert_eq!(m.courant(), "20");
    assert_eq!(m.expression(), "2 + 3 × 4 =");
}

#[test]
fn chainage_replie_a_chaque_operateur() {
    let (m, _) = session("10 - 4 ×");
    assert_eq!(m.precedent(), "6");
    assert_eq!(m.operation(), Some(Operateur::Multiplication));
    assert_eq!(m.expression(), "10 - 4 ×");
    assert_eq!(m.projeter().secondaire, "10 - 4 ×");
}

/* ------------------------ "=" après un opérateur ------------------------ */

#[test]
fn egal_apres_operateur() {
    let (m, h) = session("5 + =");
    assert_eq!(m.courant(), "5");
    assert!(m.expression().ends_with("5 ="));
    assert_eq!(m.operation(), None);
    assert_eq!(m.precedent(), "");
    assert_eq!(m.phase(), Phase::Finalise);

    let e = h.entrees().next().unwrap_or_else(|| panic!("historique vide"));
    assert_eq!(e.expression(), "5");
    assert_eq!(e.resultat(), "5");
}

#[test]
fn egal_apres_operateur_en_chaine() {
    let (m, h) = session("2 + 2 × =");
    assert_eq!(m.courant(), "4");
    assert_eq!(m.expression(), "2 + 2 =");
    assert_eq!(h.entrees().next().map(|e| e.expression()), Some("2 + 2"));
}

#[test]
fn egal_apres_division_retire_le_symbole_entier() {
    let (m, _) = session("9 ÷ =");
    assert_eq!(m.expression(), "9 =");
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn garde_du_point_decimal() {
    let (m, _) = session("1..2");
    assert_eq!(m.courant(), "1.2");
}

#[test]
fn point_en_tete() {
    let (m, _) = session(".5 + .25 =");
    assert_eq!(m.courant(), "0.75");
}

#[test]
fn saisie_apres_calcul_clos_repart_de_zero() {
    let (mut m, mut h) = session("2 + 3 =");
    assert_eq!(m.phase(), Phase::Finalise);

    taper(&mut m, &mut h, "7");
    assert_eq!(m.courant(), "7");
    assert_eq!(m.expression(), "");
    assert_eq!(m.precedent(), "");
    assert_eq!(m.operation(), None);
    assert_eq!(m.phase(), Phase::Saisie);
    assert_eq!(m.projeter().secondaire, "");
}

#[test]
fn point_apres_calcul_clos() {
    let (mut m, mut h) = session("1.5 + 1 =");
    taper(&mut m, &mut h, ".");
    assert_eq!(m.courant(), ".");
}

#[test]
fn operateur_apres_calcul_clos_reprend_le_resultat() {
    let (mut m, mut h) = session("2 + 3 =");
    taper(&mut m, &mut h, "× 4 =");
    assert_eq!(m.courant(), "20");
    assert_eq!(m.expression(), "5 × 4 =");

    let expressions: Vec<&str> = h.entrees().map(|e| e.expression()).collect();
    assert_eq!(expressions, ["5 × 4", "2 + 3"]);
}

#[test]
fn egal_repete_reporte_le_resultat() {
    let (mut m, mut h) = session("2 + 3 =");
    taper(&mut m, &mut h, "=");
    assert_eq!(m.courant(), "5");
    assert_eq!(m.expression(), "2 + 3 = 5 =");
    assert_eq!(m.phase(), Phase::Finalise);

    let lignes: Vec<(&str, &str)> = h
        .entrees()
        .map(|e| (e.expression(), e.resultat()))
        .collect();
    assert_eq!(lignes, [("2 + 3 = 5", "5"), ("2 + 3", "5")]);

    taper(&mut m, &mut h, "=");
    assert_eq!(m.expression(), "2 + 3 = 5 = 5 =");
    assert_eq!(h.len(), 3);

    // un chiffre repart toujours de zéro
    taper(&mut m, &mut h, "7");
    assert_eq!(m.expression(), "");
    assert_eq!(m.courant(), "7");
}

#[test]
fn egal_sur_resultat_efface_ne_fait_rien() {
    let (mut m, mut h) = session("2 + 3 = <");
    assert_eq!(m.courant(), "");
    taper(&mut m, &mut h, "=");
    assert_eq!(m.expression(), "2 + 3 =");
    assert_eq!(h.len(), 1);
}

#[test]
fn egal_sans_rien_ne_fait_rien() {
    let (m, h) = session("=");
    assert_vierge(&m);
    assert!(h.is_empty());

    let (m, h) = session("12 =");
    assert_eq!(m.courant(), "12");
    assert_eq!(m.expression(), "");
    assert!(h.is_empty());
}

#[test]
fn effacer_puis_continuer() {
    let (m, _) = session("123<< + 4 =");
    assert_eq!(m.courant(), "5");
    assert_eq!(m.expression(), "1 + 4 =");
}

/* ------------------------ Flottants ------------------------ */

#[test]
fn normalisation_flottante() {
    let (m, _) = session("0.2 × 0.8 =");
    assert_eq!(m.courant(), "0.16");

    let (m, _) = session("0.1 + 0.2 =");
    assert_eq!(m.courant(), "0.3");
}

#[test]
fn division_periodique_affichee_sur_10_decimales() {
    let (m, _) = session("1 ÷ 3 =");
    assert_eq!(m.courant(), "0.333333333333");
    assert_eq!(m.projeter().principal, "0.3333333333");
}

#[test]
fn grands_resultats() {
    let (m, _) = session("1000000 × 1000000 × 1000000 × 1000 =");
    assert_eq!(m.courant(), "1e+21");
    assert_eq!(m.projeter().principal, "1,000,000,000,000,000,000,000");
}

/* ------------------------ Division par zéro ------------------------ */

#[test]
fn division_par_zero_propage_infini() {
    let (mut m, mut h) = session("10 ÷ 0 =");
    assert_eq!(m.courant(), "Infinity");
    assert_eq!(m.projeter().principal, "∞");
    assert_eq!(h.entrees().next().map(|e| e.resultat()), Some("Infinity"));

    taper(&mut m, &mut h, "- 1 =");
    assert_eq!(m.courant(), "Infinity");
}

#[test]
fn zero_sur_zero_bloque_la_chaine_sans_planter() {
    let (mut m, mut h) = session("0 ÷ 0 =");
    assert_eq!(m.courant(), "NaN");
    assert_eq!(m.projeter().principal, "NaN");
    assert_eq!(h.len(), 1);

    // NaN illisible : "=" ne replie pas, l’état reste tel quel
    taper(&mut m, &mut h, "+ 1 =");
    assert_eq!(m.precedent(), "NaN");
    assert_eq!(m.courant(), "1");
    assert_eq!(m.operation(), Some(Operateur::Addition));
    assert_eq!(h.len(), 1);

    // DEL n’agit que sur l’opérande courant : NaN reste en attente
    taper(&mut m, &mut h, "<");
    assert_eq!(m.precedent(), "NaN");
    assert_eq!(m.operation(), Some(Operateur::Addition));

    taper(&mut m, &mut h, "C 1 + 1 =");
    assert_eq!(m.courant(), "2");
}

/* ------------------------ Effacement ------------------------ */

#[test]
fn effacement_total_idempotent() {
    for touches in ["", "12", "2 +", "2 + 3", "2 + 3 =", "5 + =", "0 ÷ 0 = + 1"] {
        let (mut m, _) = session(touches);
        m.tout_effacer();
        assert_vierge(&m);
        m.tout_effacer();
        assert_vierge(&m);
    }
}

/* ------------------------ Historique ------------------------ */

#[test]
fn historique_du_plus_recent_au_plus_ancien() {
    let (_, h) = session("1 + 1 = 2 + 2 = 3 + 3 =");
    let lignes: Vec<(&str, &str)> = h
        .entrees()
        .map(|e| (e.expression(), e.resultat()))
        .collect();
    assert_eq!(lignes, [("3 + 3", "6"), ("2 + 2", "4"), ("1 + 1", "2")]);
}
