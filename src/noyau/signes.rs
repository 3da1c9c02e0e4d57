// src/noyau/signes.rs
//
// Pliage des signes : toute suite de `+`/`-` adjacents devient un seul opérateur.
// Appliqué avant chaque balayage de palier et après chaque recollage.

use super::config::RegleSignes;
use super::jetons::Tok;

impl RegleSignes {
    /// Plie deux signes adjacents (a puis b) en un seul.
    pub fn plier(self, a: Tok, b: Tok) -> Tok {
        match (self, a, b) {
            (_, Tok::Plus, Tok::Plus) => Tok::Plus,
            (RegleSignes::Arithmetique, Tok::Minus, Tok::Minus) => Tok::Plus,
            _ => Tok::Minus,
        }
    }
}

/// Plie les signes jusqu’au point fixe, en une passe.
///
/// Les deux règles sont associatives : plier de gauche à droite donne le même
/// résultat que n’importe quel ordre d’application des réécritures.
///
/// Règle arithmétique : un `+` unaire issu du pliage (en tête, ou juste après
/// `*` / `/`) est retiré, l’opérande qui suit garde sa valeur.
pub fn plier_signes(seq: &mut Vec<Tok>, regle: RegleSignes) {
    let entree = std::mem::take(seq);
    let mut out: Vec<Tok> = Vec::with_capacity(entree.len());

    for tok in entree {
        match out.last_mut() {
            Some(prev) if prev.est_signe() && tok.est_signe() => {
                *prev = regle.plier(*prev, tok);
            }
            _ => out.push(tok),
        }
    }

    if regle == RegleSignes::Arithmetique {
        let mut prev: Option<Tok> = None;
        out.retain(|t| {
            let unaire = *t == Tok::Plus && matches!(prev, None | Some(Tok::Star | Tok::Slash));
            if !unaire {
                prev = Some(*t);
            }
            !unaire
        });
    }

    *seq = out;
}
