//! Noyau — évaluation (pipeline réel)
//!
//! validation -> jetons -> parenthèses (récursif) -> palier * / -> palier + - -> lecture finale
//!
//! Aucun état ne survit à un appel : même entrée => même résultat ou même erreur.

use std::fmt;

use super::config::Config;
use super::erreurs::{evaluation, ErreurFormule, Resultat};
use super::jetons::{format_tokens, tokenize, Tok};
use super::parentheses::resoudre_parentheses;
use super::reduction::{reduire_palier, Palier};

const NOTE_PIPELINE: &str =
    "Pipeline: jetons → parenthèses (récursif) → palier * / → palier + - → lecture finale.";

/// États du pipeline. Aucune transition arrière ; `Echec` est terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Etape {
    Validation,
    Parentheses,
    Multiplicatif,
    Additif,
    LectureFinale,
    Termine,
    Echec,
}

impl fmt::Display for Etape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Etape::Validation => "validation",
            Etape::Parentheses => "parenthèses",
            Etape::Multiplicatif => "palier * /",
            Etape::Additif => "palier + -",
            Etape::LectureFinale => "lecture finale",
            Etape::Termine => "terminé",
            Etape::Echec => "échec",
        };
        f.write_str(s)
    }
}

/// Démarche : ce que le noyau a fait, ligne par ligne (panneau d’explication).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    /// Un recollage par ligne, indenté selon la profondeur de parenthèses.
    pub etapes: Vec<String>,
    pub note: String,
}

impl Demarche {
    pub(crate) fn noter(&mut self, profondeur: usize, ligne: String) {
        self.etapes.push(format!("{}{ligne}", "  ".repeat(profondeur)));
    }
}

/// API publique : évalue une expression avec la configuration par défaut.
pub fn evaluer(expression: &str) -> Resultat<f64> {
    evaluer_avec(expression, &Config::default())
}

/// Variante pour une entrée éventuellement absente (`None` => erreur Argument).
pub fn evaluer_option(expression: Option<&str>) -> Resultat<f64> {
    match expression {
        Some(s) => evaluer(s),
        None => {
            log::debug!("échec ({}): entrée absente", Etape::Validation);
            Err(ErreurFormule::Argument)
        }
    }
}

/// Évalue sans démarche (aucune ligne de trace construite).
pub fn evaluer_avec(expression: &str, cfg: &Config) -> Resultat<f64> {
    log::debug!("évaluation de {expression:?} ({cfg:?})");

    let jetons = valider(expression)?;
    let v = evaluer_jetons(&jetons, cfg, 0, None)?;

    transition(Etape::Termine, 0);
    log::debug!("{expression:?} = {v}");
    Ok(v)
}

/// Évalue et retourne la valeur + la démarche (jetons, recollages, note).
pub fn evaluer_avec_demarche(expression: &str, cfg: &Config) -> Resultat<(f64, Demarche)> {
    log::debug!("évaluation de {expression:?} ({cfg:?}) avec démarche");

    let jetons = valider(expression)?;

    let mut demarche = Demarche {
        jetons: format_tokens(&jetons),
        etapes: Vec::new(),
        note: NOTE_PIPELINE.into(),
    };

    // Pipeline (récursif sur les parenthèses)
    let v = evaluer_jetons(&jetons, cfg, 0, Some(&mut demarche))?;

    transition(Etape::Termine, 0);
    log::debug!("{expression:?} = {v}");
    Ok((v, demarche))
}

/// Validation + jetons. Entrée vide ou faite d’espaces => Argument.
fn valider(expression: &str) -> Resultat<Vec<Tok>> {
    transition(Etape::Validation, 0);
    let s = expression.trim();
    if s.is_empty() {
        return Err(echec(Etape::Validation, 0)(ErreurFormule::Argument));
    }
    tokenize(s).map_err(echec(Etape::Validation, 0))
}

/// Pipeline complet sur une tranche de jetons (réentré pour chaque groupe parenthésé).
pub(crate) fn evaluer_jetons(
    jetons: &[Tok],
    cfg: &Config,
    profondeur: usize,
    mut demarche: Option<&mut Demarche>,
) -> Resultat<f64> {
    transition(Etape::Parentheses, profondeur);
    let mut seq = resoudre_parentheses(jetons, cfg, profondeur, demarche.as_deref_mut())
        .map_err(echec(Etape::Parentheses, profondeur))?;

    transition(Etape::Multiplicatif, profondeur);
    reduire_palier(&mut seq, Palier::Multiplicatif, cfg, profondeur, demarche.as_deref_mut())
        .map_err(echec(Etape::Multiplicatif, profondeur))?;

    transition(Etape::Additif, profondeur);
    reduire_palier(&mut seq, Palier::Additif, cfg, profondeur, demarche)
        .map_err(echec(Etape::Additif, profondeur))?;

    transition(Etape::LectureFinale, profondeur);
    lecture_finale(&seq).map_err(echec(Etape::LectureFinale, profondeur))
}

/// Tampon entièrement réduit => nombre. Seules formes acceptées : `n` et `- n`.
fn lecture_finale(seq: &[Tok]) -> Resultat<f64> {
    match seq {
        [Tok::Num(x)] => Ok(*x),
        [Tok::Minus, Tok::Num(x)] => Ok(-x),
        _ => evaluation(format!("formule non réductible: {:?}", format_tokens(seq))),
    }
}

fn transition(etape: Etape, profondeur: usize) {
    log::trace!("[profondeur {profondeur}] -> {etape}");
}

/// Journalise l’échec et laisse passer l’erreur.
fn echec(etape: Etape, profondeur: usize) -> impl Fn(ErreurFormule) -> ErreurFormule {
    move |e| {
        log::debug!("[profondeur {profondeur}] {} ({etape}): {e}", Etape::Echec);
        e
    }
}
