//! Noyau d’évaluation de formules
//!
//! Organisation interne :
//! - erreurs.rs      : les quatre familles d’échec (thiserror)
//! - config.rs       : réglages (arrondi intermédiaire, règle des signes, profondeur)
//! - lecture.rs      : numéral -> f64
//! - format.rs       : f64 -> forme fixe (10 décimales) + affichage
//! - jetons.rs       : tokenisation
//! - signes.rs       : pliage des signes adjacents
//! - parentheses.rs  : résolution récursive des groupes
//! - reduction.rs    : réduction par palier (* / puis + -)
//! - eval.rs         : pipeline complet + démarche

pub mod config;
pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod parentheses;
pub mod reduction;
pub mod signes;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use config::{Config, RegleSignes};
pub use erreurs::{ErreurFormule, Resultat};
pub use eval::{evaluer, evaluer_avec, evaluer_avec_demarche, evaluer_option, Demarche, Etape};
pub use format::formater_resultat;
