// src/noyau/format.rs

use super::config::Config;
use super::erreurs::{evaluation, Resultat};
use super::lecture::lire_nombre;

/* ------------------------ Forme fixe (recollage) ------------------------ */

/// Rendu à virgule fixe : exactement `decimales` chiffres après le point.
/// Jamais de notation scientifique, jamais de séparateur local.
pub fn formater_fixe(x: f64, decimales: u32) -> String {
    format!("{:.*}", decimales as usize, x)
}

/// Normalise un résultat intermédiaire avant de le recoller dans le tampon.
///
/// Avec arrondi : aller-retour par la forme fixe, donc la valeur recollée est
/// exactement celle qu’on relirait depuis le texte. Sans arrondi : f64 brut.
/// Un résultat non fini (débordement) n’a pas de forme lisible.
pub fn normaliser(x: f64, cfg: &Config) -> Resultat<f64> {
    if !x.is_finite() {
        return evaluation(format!("résultat non fini: {x}"));
    }
    match cfg.decimales_effectives() {
        Some(d) => lire_nombre(&formater_fixe(x, d)),
        None => Ok(x),
    }
}

/* ------------------------ Affichage ------------------------ */

/// Affichage “humain” d’un résultat final : plus courte forme qui se relit à l’identique.
pub fn formater_resultat(x: f64) -> String {
    if x == 0.0 {
        // pas de "-0" à l’écran
        return "0".to_string();
    }
    format!("{x}")
}
