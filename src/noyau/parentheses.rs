// src/noyau/parentheses.rs
//
// Résolution des parenthèses : première ouvrante, fermante associée par comptage,
// évaluation récursive du contenu (pipeline complet), recollage à la position.
// Le recollage est indexé : deux groupes identiques sont évalués chacun à sa place.

use super::config::Config;
use super::erreurs::{evaluation, formule_invalide, ErreurFormule, Resultat};
use super::eval::{evaluer_jetons, Demarche};
use super::format::{formater_resultat, normaliser};
use super::jetons::{format_tokens, jetons_valeur, Tok};

/// Position de la fermante associée à l’ouvrante `ouvrante`.
///
/// Compteurs ouvertes/fermées depuis l’ouvrante elle-même : la fermante est le
/// premier indice où les deux compteurs sont égaux. `None` si l’entrée est
/// déséquilibrée (jamais un indice arbitraire).
pub fn fermante_associee(jetons: &[Tok], ouvrante: usize) -> Option<usize> {
    let mut ouvertes = 0usize;
    let mut fermees = 0usize;

    for (i, t) in jetons.iter().enumerate().skip(ouvrante) {
        match t {
            Tok::LPar => ouvertes += 1,
            Tok::RPar => fermees += 1,
            _ => {}
        }
        if ouvertes == fermees {
            return Some(i);
        }
    }

    None
}

/// Remplace chaque groupe parenthésé par sa valeur ; renvoie un tampon plat.
/// La démarche n’est écrite que si l’appelant en fournit une.
pub fn resoudre_parentheses(
    jetons: &[Tok],
    cfg: &Config,
    profondeur: usize,
    mut demarche: Option<&mut Demarche>,
) -> Resultat<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::with_capacity(jetons.len());
    let mut i = 0usize;

    while i < jetons.len() {
        match jetons[i] {
            Tok::LPar => {
                let fin = fermante_associee(jetons, i).ok_or_else(|| {
                    ErreurFormule::FormuleInvalide("parenthèse ouvrante sans fermante".into())
                })?;

                let interieur = &jetons[i + 1..fin];
                if interieur.is_empty() {
                    return formule_invalide("parenthèses vides");
                }

                if let Some(max) = cfg.profondeur_max {
                    if profondeur >= max {
                        return formule_invalide(format!("imbrication trop profonde (max {max})"));
                    }
                }

                let v = evaluer_jetons(interieur, cfg, profondeur + 1, demarche.as_deref_mut())?;
                let v = normaliser(v, cfg)?;

                log::trace!(
                    "parenthèses (profondeur {profondeur}): {} -> {v}",
                    format_tokens(interieur)
                );
                if let Some(d) = demarche.as_deref_mut() {
                    d.noter(
                        profondeur,
                        format!("({}) = {}", format_tokens(interieur), formater_resultat(v)),
                    );
                }

                out.extend(jetons_valeur(v));
                i = fin + 1;
            }
            Tok::RPar => return evaluation("parenthèse fermante sans ouvrante"),
            t => {
                out.push(t);
                i += 1;
            }
        }
    }

    Ok(out)
}
