// src/noyau/nombre.rs
//
// Opérandes = texte. Trois passerelles texte <-> f64 :
// - parse_float          : lecture tolérante (préfixe numérique, reste ignoré)
// - nombre_vers_texte    : écriture canonique d’un résultat (forme courte, exposant si extrême)
// - arrondir_significatif: efface le “bruit” binaire (0.2*0.8 -> 0.16)

/// Lit le plus long préfixe numérique de `texte` (espaces de tête ignorés).
///
/// "12abc" -> 12, "1." -> 1, ".5" -> 0.5, "1.5e-" -> 1.5, "Infinity" -> ∞.
/// `None` si aucun chiffre n’ouvre le texte ("", ".", "NaN", "abc").
pub fn parse_float(texte: &str) -> Option<f64> {
    let s = texte.trim_start();
    let octets = s.as_bytes();
    let n = octets.len();

    let mut i = 0;
    let negatif = matches!(octets.first(), Some(b'-'));
    if matches!(octets.first(), Some(b'+' | b'-')) {
        i = 1;
    }

    if s[i..].starts_with("Infinity") {
        return Some(if negatif {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let debut = i;
    while i < n && octets[i].is_ascii_digit() {
        i += 1;
    }
    let mut chiffres = i - debut;

    if i < n && octets[i] == b'.' {
        i += 1;
        let debut_fraction = i;
        while i < n && octets[i].is_ascii_digit() {
            i += 1;
        }
        chiffres += i - debut_fraction;
    }

    if chiffres == 0 {
        return None;
    }

    // Exposant seulement s’il est complet (au moins un chiffre).
    let mut fin = i;
    if i < n && matches!(octets[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < n && matches!(octets[j], b'+' | b'-') {
            j += 1;
        }
        let debut_exposant = j;
        while j < n && octets[j].is_ascii_digit() {
            j += 1;
        }
        if j > debut_exposant {
            fin = j;
        }
    }

    s[..fin].parse::<f64>().ok()
}

/// Texte canonique d’un nombre (forme la plus courte qui se relit à l’identique).
///
/// Notation exponentielle hors de [1e-6, 1e21) : "1e+21", "1.5e-7".
pub fn nombre_vers_texte(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let a = x.abs();
    if (1e-6..1e21).contains(&a) {
        return format!("{x}");
    }

    let brut = format!("{x:e}");
    match brut.split_once('e') {
        Some((mantisse, exposant)) if !exposant.starts_with('-') => {
            format!("{mantisse}e+{exposant}")
        }
        _ => brut,
    }
}

/// Arrondi à `chiffres` chiffres significatifs (pas à un nombre fixe de décimales).
/// Non-finis rendus tels quels.
pub fn arrondir_significatif(x: f64, chiffres: usize) -> f64 {
    if !x.is_finite() || chiffres == 0 {
        return x;
    }
    format!("{:.*e}", chiffres - 1, x).parse().unwrap_or(x)
}
