// src/noyau/jetons.rs

use super::erreurs::{evaluation, Resultat};
use super::format::formater_resultat;
use super::lecture::{est_car_numeral, lire_nombre};

/// Jeton du tampon d’expression.
///
/// Un `Num` porte toujours une magnitude positive : le signe d’un opérande
/// vit dans un `Minus` qui le précède.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

impl Tok {
    pub fn est_signe(&self) -> bool {
        matches!(self, Tok::Plus | Tok::Minus)
    }

    pub fn symbole(&self) -> Option<char> {
        match self {
            Tok::Plus => Some('+'),
            Tok::Minus => Some('-'),
            Tok::Star => Some('*'),
            Tok::Slash => Some('/'),
            Tok::LPar => Some('('),
            Tok::RPar => Some(')'),
            Tok::Num(_) => None,
        }
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 123.456, .5) — suite maximale de chiffres et de points
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces (séparateurs, sinon ignorés)
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let tok = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = tok {
            out.push(t);
            i += 1;
            continue;
        }

        // Numéral : suite maximale chiffres/points, validée par la lecture
        if est_car_numeral(c) {
            let start = i;
            while i < chars.len() && est_car_numeral(chars[i]) {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_nombre(&texte)?));
            continue;
        }

        return evaluation(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
/// Espaces entre jetons, sauf à l’intérieur des parenthèses : "(10 / 2) * 5".
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = String::new();
    let mut prev: Option<Tok> = None;

    for t in tokens {
        if let Some(p) = prev {
            if p != Tok::LPar && *t != Tok::RPar {
                out.push(' ');
            }
        }
        match t {
            Tok::Num(x) => out.push_str(&formater_resultat(*x)),
            autre => out.extend(autre.symbole()),
        }
        prev = Some(*t);
    }

    out
}

/// Résultat signé -> jetons à recoller (`Minus` + magnitude si négatif).
pub fn jetons_valeur(x: f64) -> Vec<Tok> {
    if x.is_sign_negative() {
        vec![Tok::Minus, Tok::Num(-x)]
    } else {
        vec![Tok::Num(x)]
    }
}
