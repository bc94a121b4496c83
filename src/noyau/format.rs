// src/noyau/format.rs
//
// Affichage d’un opérande : séparateurs de milliers “,” + au plus 10 décimales,
// zéros finaux retirés. Pur, sans état.

use super::nombre::parse_float;

/// Décimales affichées au maximum.
const DECIMALES_MAX: usize = 10;

/// Formate un opérande texte pour l’écran principal.
///
/// - "" => "0"
/// - texte non numérique (ex: "NaN") => rendu tel quel
/// - sinon => `format_valeur`
pub fn format_nombre(texte: &str) -> String {
    if texte.is_empty() {
        return "0".to_string();
    }
    match parse_float(texte) {
        Some(v) => format_valeur(v),
        None => texte.to_string(),
    }
}

/// 1234567.891 -> "1,234,567.891" ; 0.1234567890123 -> "0.123456789" ; ∞ -> "∞".
///
/// Les chiffres affichés sont ceux de l’écriture la plus courte du flottant :
/// 1e23 s’affiche 100,000,000,000,000,000,000,000 et non la valeur binaire exacte.
pub fn format_valeur(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let (entier, fraction) = ecriture_positionnelle(v.abs());
    let (entier, fraction) = arrondir_fraction(entier, fraction, DECIMALES_MAX);
    let fraction = fraction.trim_end_matches('0');

    let mut sortie = String::with_capacity(entier.len() * 4 / 3 + fraction.len() + 2);
    if v.is_sign_negative() {
        sortie.push('-');
    }
    sortie.push_str(&grouper_milliers(&entier));
    if !fraction.is_empty() {
        sortie.push('.');
        sortie.push_str(fraction);
    }
    sortie
}

/// Chiffres les plus courts de `a` (fini, ≥ 0) remis en notation positionnelle.
/// 1e23 -> ("100000000000000000000000", "") ; 1.5e-7 -> ("0", "00000015").
fn ecriture_positionnelle(a: f64) -> (String, String) {
    let scientifique = format!("{a:e}");
    let (mantisse, exposant) = scientifique
        .split_once('e')
        .unwrap_or((scientifique.as_str(), "0"));
    let exposant: i64 = exposant.parse().unwrap_or(0);
    let chiffres: String = mantisse.chars().filter(char::is_ascii_digit).collect();

    if exposant < 0 {
        let zeros = "0".repeat((-exposant - 1) as usize);
        return ("0".to_string(), zeros + &chiffres);
    }

    let longueur_entier = exposant as usize + 1;
    if chiffres.len() <= longueur_entier {
        let zeros = "0".repeat(longueur_entier - chiffres.len());
        (chiffres + &zeros, String::new())
    } else {
        let (entier, fraction) = chiffres.split_at(longueur_entier);
        (entier.to_string(), fraction.to_string())
    }
}

/// Arrondi décimal (demi vers le haut) à `max` décimales, retenue propagée
/// jusque dans la partie entière (0.99999999999 -> "1").
fn arrondir_fraction(entier: String, fraction: String, max: usize) -> (String, String) {
    if fraction.len() <= max {
        return (entier, fraction);
    }

    let vers_le_haut = fraction.as_bytes()[max] >= b'5';
    let mut coupe = entier.len();
    let mut chiffres: Vec<u8> = entier.into_bytes();
    chiffres.extend_from_slice(&fraction.as_bytes()[..max]);

    if vers_le_haut {
        let mut retenue = true;
        for c in chiffres.iter_mut().rev() {
            if *c == b'9' {
                *c = b'0';
            } else {
                *c += 1;
                retenue = false;
                break;
            }
        }
        if retenue {
            chiffres.insert(0, b'1');
            coupe += 1;
        }
    }

    let (entier, fraction) = chiffres.split_at(coupe);
    let texte = |octets: &[u8]| octets.iter().map(|&c| char::from(c)).collect::<String>();
    (texte(entier), texte(fraction))
}

fn grouper_milliers(chiffres: &str) -> String {
    let n = chiffres.len();
    let mut sortie = String::with_capacity(n + n / 3);
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            sortie.push(',');
        }
        sortie.push(c);
    }
    sortie
}
