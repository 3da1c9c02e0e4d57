// src/noyau/erreurs.rs

use thiserror::Error;

/// Les quatre familles d’échec du noyau.
///
/// Toute erreur est terminale : la première détectée interrompt l’évaluation,
/// aucun résultat partiel n’accompagne jamais une erreur.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ErreurFormule {
    /// Entrée absente, vide ou faite seulement d’espaces.
    #[error("Entrée vide : une expression est requise")]
    Argument,

    /// Parenthèses vides `()` ou parenthèse ouvrante sans fermante.
    #[error("Formule invalide : {0}")]
    FormuleInvalide(String),

    /// Fragment numérique illisible (opérande manquant, résidu malformé...).
    #[error("Évaluation impossible : {0}")]
    Evaluation(String),

    #[error("Division par zéro")]
    DivisionParZero,
}

pub type Resultat<T> = Result<T, ErreurFormule>;

pub(crate) fn formule_invalide<T, S: Into<String>>(msg: S) -> Resultat<T> {
    Err(ErreurFormule::FormuleInvalide(msg.into()))
}

pub(crate) fn evaluation<T, S: Into<String>>(msg: S) -> Resultat<T> {
    Err(ErreurFormule::Evaluation(msg.into()))
}
