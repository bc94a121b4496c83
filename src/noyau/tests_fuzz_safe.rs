//! Tests fuzz safe : robustesse + déterminisme + invariants du moteur.
//!
//! But : marteler la machine à états avec des séquences de touches aléatoires.
//! - RNG déterministe (seed fixe)
//! - longueur de séquence bornée
//! - budget temps global
//! - invariants vérifiés après CHAQUE touche

use std::time::{Duration, Instant};

use super::moteur::Phase;
use super::{Historique, Moteur, Operateur};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Touches ------------------------ */

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Op(Operateur),
    Egal,
    Effacer,
    ToutEffacer,
}

fn gen_touche(rng: &mut Rng) -> Touche {
    // chiffres majoritaires, "0" et "." sur-représentés (division par zéro, points multiples)
    match rng.pick(20) {
        0..=8 => Touche::Chiffre(char::from(b'1' + rng.pick(9) as u8)),
        9 | 10 => Touche::Chiffre('0'),
        11 => Touche::Chiffre('.'),
        12..=15 => Touche::Op(Operateur::TOUS[rng.pick(4) as usize]),
        16 | 17 => Touche::Egal,
        18 => Touche::Effacer,
        _ => Touche::ToutEffacer,
    }
}

fn appliquer(m: &mut Moteur, h: &mut Historique, t: Touche) {
    match t {
        Touche::Chiffre(c) => m.ajouter_chiffre(c),
        Touche::Op(op) => m.choisir_operateur(op),
        Touche::Egal => m.evaluer(h),
        Touche::Effacer => m.effacer_dernier(),
        Touche::ToutEffacer => m.tout_effacer(),
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_invariants(m: &Moteur, trace: &[Touche]) {
    assert_eq!(
        m.operation().is_some(),
        !m.precedent().is_empty(),
        "opération <=> précédent, trace={trace:?}"
    );

    if m.phase() == Phase::Finalise {
        assert!(
            m.expression().ends_with(" ="),
            "calcul clos sans marque finale, trace={trace:?}"
        );
        assert!(m.operation().is_none(), "calcul clos avec opération, trace={trace:?}");
    }

    assert!(
        m.courant().matches('.').count() <= 1,
        "plusieurs points: {:?}, trace={trace:?}",
        m.courant()
    );

    let p = m.projeter();
    assert!(!p.principal.is_empty(), "affichage principal vide, trace={trace:?}");
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_machine_a_etats() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut vus_clos = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let mut m = Moteur::new();
        let mut h = Historique::default();
        let mut trace = Vec::new();

        for _ in 0..40 {
            let t = gen_touche(&mut rng);
            trace.push(t);

            let avant = h.len();
            appliquer(&mut m, &mut h, t);

            // l’historique ne grandit que sur "=", d’au plus une ligne
            match t {
                Touche::Egal => assert!(h.len() <= avant + 1, "trace={trace:?}"),
                _ => assert_eq!(h.len(), avant, "trace={trace:?}"),
            }
            if m.phase() == Phase::Finalise {
                vus_clos += 1;
            }

            check_invariants(&m, &trace);
        }
    }

    // Sinon le fuzz ne “balaye” rien.
    assert!(vus_clos > 50, "trop peu de calculs clos: {vus_clos}");
}

#[test]
fn fuzz_safe_determinisme() {
    let jouer = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut m = Moteur::new();
        let mut h = Historique::default();
        for _ in 0..500 {
            let t = gen_touche(&mut rng);
            appliquer(&mut m, &mut h, t);
        }
        let lignes: Vec<(String, String)> = h
            .entrees()
            .map(|e| (e.expression().to_string(), e.resultat().to_string()))
            .collect();
        (m.projeter(), lignes)
    };

    assert_eq!(jouer(0xBADC0DE), jouer(0xBADC0DE));
}

#[test]
fn fuzz_safe_effacement_total_depuis_tout_etat() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..200 {
        budget(t0, max);

        let mut m = Moteur::new();
        let mut h = Historique::default();
        for _ in 0..rng.pick(30) {
            let t = gen_touche(&mut rng);
            appliquer(&mut m, &mut h, t);
        }

        m.tout_effacer();
        let une_fois = m.projeter();
        m.tout_effacer();
        assert_eq!(m.projeter(), une_fois);
        assert_eq!(une_fois.principal, "0");
        assert_eq!(une_fois.secondaire, "");
        assert_eq!(m.phase(), Phase::Saisie);
    }
}
