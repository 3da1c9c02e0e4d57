//! Calculatrice Formules — bibliothèque
//!
//! Le noyau évalue une formule plate (`+ - * /`, parenthèses, nombres décimaux)
//! en un f64, ou échoue avec une `ErreurFormule` typée.
//!
//! ```
//! use calculatrice_formules::noyau::evaluer;
//!
//! assert_eq!(evaluer("(10/2)*5"), Ok(25.0));
//! ```

pub mod noyau;
