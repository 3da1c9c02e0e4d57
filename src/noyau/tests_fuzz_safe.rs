//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - générateurs proptest (graines reproductibles, réduction automatique des contre-exemples)
//! - profondeur bornée
//! - invariant clé : une formule bien formée donne un f64 fini, ou une division par zéro

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::{evaluer, evaluer_avec, Config, ErreurFormule, RegleSignes};

/* ------------------------ Générateurs ------------------------ */

fn nombre() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..1000, 0u32..1000).prop_map(|(a, b)| format!("{a}.{b}")),
    ]
}

fn operateur() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')]
}

/// Formule bien formée : atomes éventuellement négatifs, groupes, opérateurs binaires.
fn formule_valide() -> impl Strategy<Value = String> {
    let atome = (any::<bool>(), nombre()).prop_map(|(neg, n)| if neg { format!("-{n}") } else { n });

    atome.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| format!("({e})")),
            (inner.clone(), operateur(), inner).prop_map(|(a, op, b)| format!("{a}{op}{b}")),
        ]
    })
}

/// Arbre entier totalement parenthésé + sa valeur attendue (i64, sans débordement).
fn arbre_entier() -> impl Strategy<Value = (String, i64)> {
    // feuilles signées : "-7" entre aussi en tête ou après un opérateur
    let feuille = (-9i64..=9).prop_map(|n| (n.to_string(), n));

    feuille.prop_recursive(3, 8, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop_oneof![Just('+'), Just('-'), Just('*')],
                inner.clone(),
            )
                .prop_map(|((ga, va), op, (gb, vb))| {
                    let v = match op {
                        '+' => va + vb,
                        '-' => va - vb,
                        _ => va * vb,
                    };
                    (format!("({ga}{op}{gb})"), v)
                }),
            // moins unaire devant un groupe
            inner.prop_map(|(g, v)| (format!("-({g})"), -v)),
        ]
    })
}

/* ------------------------ Helpers ------------------------ */

fn is_erreur_attendue(e: &ErreurFormule) -> bool {
    // Liste blanche : une formule bien formée peut diviser par un groupe nul
    // (ou par une valeur qui s’arrondit à zéro sur 10 décimales).
    matches!(e, ErreurFormule::DivisionParZero)
}

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn fuzz_formule_valide_termine(expr in formule_valide()) {
        match evaluer(&expr) {
            Ok(v) => prop_assert!(v.is_finite(), "expr={expr:?} v={v}"),
            Err(e) => prop_assert!(is_erreur_attendue(&e), "erreur non attendue: expr={expr:?} err={e}"),
        }
    }

    #[test]
    fn fuzz_determinisme(expr in formule_valide()) {
        prop_assert_eq!(evaluer(&expr), evaluer(&expr));
    }

    #[test]
    fn fuzz_parenthese_non_fermee(expr in formule_valide()) {
        let casse = format!("({expr}");
        prop_assert!(
            matches!(evaluer(&casse), Err(ErreurFormule::FormuleInvalide(_))),
            "expr={casse:?}"
        );
    }

    #[test]
    fn fuzz_arbre_entier_exact((expr, attendu) in arbre_entier()) {
        // règle arithmétique : `--` vaut `+`, donc l’arbre parenthésé est exact
        let cfg = Config {
            regle_signes: RegleSignes::Arithmetique,
            ..Config::default()
        };
        prop_assert_eq!(evaluer_avec(&expr, &cfg), Ok(attendu as f64), "expr={}", expr);
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = somme_balancee("1/2", 800);
    let v = evaluer(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert!(t0.elapsed() <= max, "budget temps dépassé: {:?}", max);

    // 800*(1/2) = 400
    assert_eq!(v, 400.0);
}
