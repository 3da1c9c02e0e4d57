//! Tests scientifiques (campagne) : le contrat observable du noyau, propriété par propriété.
//!
//! Notes :
//! - égalités exactes sur f64 : chaque résultat intermédiaire repasse par sa forme
//!   à 10 décimales, donc 127.3+10.5+19.75 retombe exactement sur le littéral 157.55.
//! - `--` se plie en `-` par défaut (règle historique), voir `regle_signes_*`.

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use super::{evaluer, evaluer_avec, evaluer_option, Config, ErreurFormule, RegleSignes};

fn eval_ok(expr: &str) -> f64 {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_val(expr: &str, attendu: f64) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

fn assert_formule_invalide(expr: &str) {
    assert!(
        matches!(evaluer(expr), Err(ErreurFormule::FormuleInvalide(_))),
        "expr={expr:?} => {:?}",
        evaluer(expr)
    );
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Validation ------------------------ */

#[test]
fn sci_entree_vide_argument() {
    assert_eq!(evaluer(""), Err(ErreurFormule::Argument));
    assert_eq!(evaluer("   "), Err(ErreurFormule::Argument));
    assert_eq!(evaluer_option(None), Err(ErreurFormule::Argument));
}

/* ------------------------ Parenthèses ------------------------ */

#[test]
fn sci_parentheses_invalides() {
    assert_formule_invalide("(");
    assert_formule_invalide("()");
    assert_formule_invalide("2*()");
    assert_formule_invalide("((1+2)");
}

#[test]
fn sci_parentheses_nombre_seul() {
    assert_val("(5)", 5.0);
    assert_val("(123.456)", 123.456);
}

#[test]
fn sci_parentheses_priorite() {
    assert_val("(10/2)*5", 25.0);
    assert_val("10/(2*5)", 1.0);
}

#[test]
fn sci_groupes_identiques() {
    // deux groupes identiques, chacun évalué à sa place
    assert_val("(1+1)*(1+1)", 4.0);
    assert_val("(3-2)-(3-2)", 0.0);
}

/* ------------------------ Palier multiplicatif ------------------------ */

#[test]
fn sci_multiplication() {
    assert_val("2*10", 20.0);
    assert_val("1.25*5.75", 7.1875);
}

#[test]
fn sci_division() {
    assert_val("2/10", 0.2);
    assert_val("5.75/1.25", 4.6);
    assert_eq!(evaluer("1/0"), Err(ErreurFormule::DivisionParZero));
    assert_eq!(evaluer("1/(2-2)"), Err(ErreurFormule::DivisionParZero));
}

#[test]
fn sci_gauche_a_droite_meme_palier() {
    assert_val("10/2*5", 25.0);
    assert_val("10*2/5", 4.0);
}

/* ------------------------ Palier additif ------------------------ */

#[test]
fn sci_addition() {
    assert_val("3+4", 7.0);
    assert_val("127.3+10.5+19.75", 157.55);
}

#[test]
fn sci_priorite_sans_parentheses() {
    assert_val("12-6/3", 10.0);
    assert_val("2+3*4-10/5", 12.0);
}

/* ------------------------ Signes ------------------------ */

#[test]
fn sci_collisions_de_signes() {
    assert_val("6++3", 9.0);
    assert_val("6+-3", 3.0);
    assert_val("6-+3", 3.0);
}

#[test]
fn sci_negatifs() {
    assert_val("-123", -123.0);
    assert_val("-12+2", -10.0);
    assert_val("2*-10", -20.0);
}

#[test]
fn regle_signes_historique_par_defaut() {
    assert_val("6--3", 3.0);
}

#[test]
fn regle_signes_arithmetique_sur_demande() {
    let cfg = Config {
        regle_signes: RegleSignes::Arithmetique,
        ..Config::default()
    };
    assert_eq!(evaluer_avec("6--3", &cfg), Ok(9.0));
    // sans collision `--`, les deux règles coïncident
    assert_eq!(evaluer_avec("6+-3", &cfg), Ok(3.0));
    assert_eq!(evaluer_avec("2*-10", &cfg), Ok(-20.0));
}

#[test]
fn regle_signes_arithmetique_plus_unaire() {
    // `--` plié en `+` en tête ou juste après `*`/`/` : signe unaire, pas un opérateur
    let cfg = Config {
        regle_signes: RegleSignes::Arithmetique,
        ..Config::default()
    };
    assert_eq!(evaluer_avec("-(-5)", &cfg), Ok(5.0));
    assert_eq!(evaluer_avec("--5", &cfg), Ok(5.0));
    assert_eq!(evaluer_avec("-(-2)*3", &cfg), Ok(6.0));
    assert_eq!(evaluer_avec("1*-(-2)", &cfg), Ok(2.0));
    assert_eq!(evaluer_avec("8/-(-2)", &cfg), Ok(4.0));
    assert_eq!(evaluer_avec("(-(-1))-(-(-1))", &cfg), Ok(0.0));
}

/* ------------------------ Expression composée ------------------------ */

#[test]
fn sci_expression_imbriquee() {
    assert_val("(9/4+4/5)/(2/5)*(1/4+7/2)", 28.59375);
}

/* ------------------------ Transparence référentielle ------------------------ */

#[test]
fn sci_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    for expr in ["(9/4+4/5)/(2/5)*(1/4+7/2)", "1/0", "((", "0.1+0.2", "-(-(-1))"] {
        budget(t0, max);
        let a = evaluer(expr);
        let b = evaluer(expr);
        assert_eq!(a, b, "expr={expr:?}");
    }
}

#[test]
fn sci_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let n = 200;
    let expr = format!("{}1{}", "(".repeat(n), "+1)".repeat(n));
    let v = eval_ok(&expr);
    budget(t0, max);

    assert_eq!(v, (n + 1) as f64);
}
