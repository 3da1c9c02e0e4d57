// src/noyau/config.rs
//
// Réglages du noyau. Le défaut reproduit exactement le contrat historique :
// 10 décimales à chaque recollage, `--` plié en `-`, pas de limite d’imbrication.

/// Décimales utilisées pour normaliser chaque résultat intermédiaire.
pub const DECIMALES_DEFAUT: u32 = 10;

/// Garde-fou : au-delà, un f64 n’a plus de chiffres significatifs à offrir.
pub const DECIMALES_MAX: u32 = 17;

/// Pliage de deux signes adjacents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegleSignes {
    /// `++ → +`, `-- → -`, `+- → -`, `-+ → -`
    #[default]
    Historique,
    /// `++ → +`, `-- → +`, `+- → -`, `-+ → -`
    Arithmetique,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// `None` : on garde le f64 exact entre deux étapes.
    pub decimales: Option<u32>,
    pub regle_signes: RegleSignes,
    /// `None` : imbrication libre (l’appelant borne la taille de l’entrée).
    pub profondeur_max: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decimales: Some(DECIMALES_DEFAUT),
            regle_signes: RegleSignes::Historique,
            profondeur_max: None,
        }
    }
}

impl Config {
    /// Variante sans arrondi intermédiaire.
    pub fn exacte() -> Self {
        Self {
            decimales: None,
            ..Self::default()
        }
    }

    /// Décimales effectives (bornées).
    pub fn decimales_effectives(&self) -> Option<u32> {
        self.decimales.map(|d| d.min(DECIMALES_MAX))
    }
}
