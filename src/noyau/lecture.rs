// src/noyau/lecture.rs
//
// Lecture d’un numéral décimal : `-`? chiffres `.`? chiffres (au moins un chiffre).
// Pas d’exposant, pas de `+` initial, pas de séparateur local.

use super::erreurs::{evaluation, Resultat};

/// Vrai pour les caractères qui composent un opérande : chiffres et point.
pub fn est_car_numeral(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Lit un numéral en f64.
///
/// Échoue (famille Évaluation) si le texte n’est pas un numéral valide :
/// vide, signe seul, deux points, caractère étranger...
pub fn lire_nombre(texte: &str) -> Resultat<f64> {
    let corps = texte.strip_prefix('-').unwrap_or(texte);

    let mut points = 0usize;
    let mut chiffres = 0usize;
    for c in corps.chars() {
        match c {
            '0'..='9' => chiffres += 1,
            '.' => points += 1,
            _ => return evaluation(format!("nombre invalide: {texte:?}")),
        }
    }

    if chiffres == 0 || points > 1 {
        return evaluation(format!("nombre invalide: {texte:?}"));
    }

    // La grammaire ci-dessus est un sous-ensemble strict de celle de f64::from_str.
    let x = texte
        .parse::<f64>()
        .or_else(|_| evaluation(format!("nombre invalide: {texte:?}")))?;

    if !x.is_finite() {
        return evaluation(format!("nombre hors limites: {texte:?}"));
    }
    Ok(x)
}
