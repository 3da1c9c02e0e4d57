//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, réglages, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing) : seulement l’édition du texte.
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur l’arrondi intermédiaire (décimales).

use calculatrice_formules::noyau::config::{DECIMALES_DEFAUT, DECIMALES_MAX};
use calculatrice_formules::noyau::{Config, Demarche, RegleSignes};

/// Nature d’une touche d’insertion (règles d’espacement différentes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertKind {
    Digit,
    Op,
    OpenParen,
    CloseParen,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,     // dernière valeur (forme courte)
    pub erreur: String,       // message d’erreur (si l’évaluation échoue)
    pub resultat_dispo: bool, // false au démarrage / après CLR

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- réglages noyau ---
    pub decimales: u32,         // arrondi des résultats intermédiaires
    pub exact: bool,            // true : pas d’arrondi intermédiaire
    pub moins_moins_plus: bool, // true : `--` vaut `+`

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            resultat_dispo: false,
            demarche: Demarche::default(),
            decimales: DECIMALES_DEFAUT,
            exact: false,
            moins_moins_plus: false,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + réglages par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.decimales = DECIMALES_DEFAUT;
        self.exact = false;
        self.moins_moins_plus = false;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.resultat_dispo = false;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX : on CONSERVE le dernier résultat affiché, mais la démarche
    /// (non fiable si l’évaluation échoue) est effacée.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur + démarche).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.resultat_dispo = true;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Touche du pavé : insère `symbole` dans l’entrée avec un espacement lisible.
    ///
    /// Deux opérandes côte à côte ne se lisent pas : `(` après un chiffre ou une
    /// fermante insère d’abord un `*` (`2(` devient `2 * (`).
    pub fn inserer(&mut self, symbole: &str, kind: InsertKind) {
        match kind {
            InsertKind::CloseParen => {
                self.entree.truncate(self.entree.trim_end().len());
                self.entree.push_str(symbole);
            }
            InsertKind::OpenParen => {
                let last = self.entree.chars().rev().find(|c| !c.is_whitespace());
                if matches!(last, Some(c) if c.is_ascii_digit() || c == '.' || c == ')') {
                    self.entree.truncate(self.entree.trim_end().len());
                    self.entree.push_str(" * ");
                }
                self.entree.push_str(symbole);
            }
            InsertKind::Op => {
                self.entree.truncate(self.entree.trim_end().len());
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(symbole);
                self.entree.push(' ');
            }
            InsertKind::Digit => {
                // chiffres: pas d’espaces auto ("2 * - 3" se lit comme "2*-3")
                self.entree.push_str(symbole);
            }
        }
        self.focus_entree = true;
    }

    /// Garde-fou : limite les décimales.
    pub fn set_decimales(&mut self, decimales: u32) {
        self.decimales = decimales.min(DECIMALES_MAX);
        self.focus_entree = true;
    }

    /// Réglages UI -> configuration du noyau.
    pub fn config(&self) -> Config {
        Config {
            decimales: if self.exact { None } else { Some(self.decimales) },
            regle_signes: if self.moins_moins_plus {
                RegleSignes::Arithmetique
            } else {
                RegleSignes::Historique
            },
            profondeur_max: None,
        }
    }
}
