// src/noyau/reduction.rs
//
// Réduction par palier sur un tampon plat (sans parenthèses).
//
// Règles:
// - palier multiplicatif {*, /} d’abord, puis additif {+, -}
// - toujours l’opérateur le plus à gauche du palier => gauche-à-droite garanti
// - jamais l’indice 0 : un signe en tête n’est pas un opérateur
// - moins unaire : fait partie de l’opérande gauche seulement en tête du tampon,
//   de l’opérande droit seulement juste après l’opérateur

use num_traits::Zero;

use super::config::Config;
use super::erreurs::{evaluation, ErreurFormule, Resultat};
use super::eval::Demarche;
use super::format::{formater_resultat, normaliser};
use super::jetons::{jetons_valeur, Tok};
use super::signes::plier_signes;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palier {
    Multiplicatif,
    Additif,
}

impl Palier {
    pub fn contient(self, t: &Tok) -> bool {
        match self {
            Palier::Multiplicatif => matches!(t, Tok::Star | Tok::Slash),
            Palier::Additif => matches!(t, Tok::Plus | Tok::Minus),
        }
    }
}

/// Réduit tous les opérateurs du palier, de gauche à droite.
pub fn reduire_palier(
    seq: &mut Vec<Tok>,
    palier: Palier,
    cfg: &Config,
    profondeur: usize,
    mut demarche: Option<&mut Demarche>,
) -> Resultat<()> {
    loop {
        plier_signes(seq, cfg.regle_signes);

        let Some(i) = (1..seq.len()).find(|&i| palier.contient(&seq[i])) else {
            return Ok(());
        };

        let op = seq[i];
        let (debut, a) = operande_gauche(seq, i)?;
        let (fin, b) = operande_droite(seq, i)?;
        let r = normaliser(appliquer(op, a, b)?, cfg)?;

        log::trace!("{palier:?} (profondeur {profondeur}): {a} {op:?} {b} = {r}");
        if let Some(d) = demarche.as_deref_mut() {
            let ligne = format!(
                "{} {} {} = {}",
                formater_resultat(a),
                op.symbole().unwrap_or('?'),
                formater_resultat(b),
                formater_resultat(r)
            );
            d.noter(profondeur, ligne);
        }

        // chaque recollage retire au moins un opérateur : terminaison
        seq.splice(debut..=fin, jetons_valeur(r));
    }
}

/// Opérande à gauche de `seq[i]` : (indice de début, valeur signée).
fn operande_gauche(seq: &[Tok], i: usize) -> Resultat<(usize, f64)> {
    match seq[i - 1] {
        Tok::Num(x) if i == 2 && seq[0] == Tok::Minus => Ok((0, -x)),
        Tok::Num(x) => Ok((i - 1, x)),
        _ => evaluation(format!(
            "opérande gauche manquant avant '{}'",
            seq[i].symbole().unwrap_or('?')
        )),
    }
}

/// Opérande à droite de `seq[i]` : (indice de fin, valeur signée).
fn operande_droite(seq: &[Tok], i: usize) -> Resultat<(usize, f64)> {
    let negatif = seq.get(i + 1) == Some(&Tok::Minus);
    let j = if negatif { i + 2 } else { i + 1 };

    match seq.get(j) {
        Some(Tok::Num(x)) if negatif => Ok((j, -x)),
        Some(Tok::Num(x)) => Ok((j, *x)),
        _ => evaluation(format!(
            "opérande droit manquant après '{}'",
            seq[i].symbole().unwrap_or('?')
        )),
    }
}

/// Calcul binaire. Diviseur exactement nul => DivisionParZero.
pub fn appliquer(op: Tok, a: f64, b: f64) -> Resultat<f64> {
    match op {
        Tok::Star => Ok(a * b),
        Tok::Slash => {
            if b.is_zero() {
                return Err(ErreurFormule::DivisionParZero);
            }
            Ok(a / b)
        }
        Tok::Plus => Ok(a + b),
        Tok::Minus => Ok(a - b),
        autre => evaluation(format!("opérateur inattendu: {autre:?}")),
    }
}
