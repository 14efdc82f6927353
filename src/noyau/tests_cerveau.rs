//! Tests du cerveau (campagne) : contrats d'API + robustesse + limites contrôlées.
//!
//! But : vérifier les contrats observables par l'hôte UI, sans faire chauffer
//! la machine.
//! - budget temps sur le stress
//! - profondeur bornée (l'évaluation est récursive : on ne chaîne pas 10 000 opérations)
//!
//! Notes importantes (aligné avec l'état actuel du noyau) :
//! - None ne signale QUE « variable non liée » ou « pas assez d'opérandes ».
//!   Les fautes de domaine IEEE (÷0, √ négatif) sortent en inf/NaN ordinaires.
//! - L'annulation retire UN jeton, pas toute une sous-expression.

use std::time::{Duration, Instant};

use super::cerveau::Cerveau;

fn init_traces() {
    // RUST_LOG=debug cargo test -- --nocapture pour voir les évaluations
    let _ = env_logger::builder().is_test(true).try_init();
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {max:?}");
    }
}

/* ------------------------ Pile : opérandes et opérations ------------------------ */

#[test]
fn operandes_seuls_le_sommet_gagne() {
    let mut c = Cerveau::new();
    c.pousse_operande(1.0);
    c.pousse_operande(2.0);
    let r = c.pousse_operande(3.0);
    // seul le sommet est évalué ; 1 et 2 restent dessous, intacts
    assert_eq!(r, Some(3.0));
    assert_eq!(c.description(), "1,2,3");
}

#[test]
fn addition_simple() {
    let mut c = Cerveau::new();
    c.pousse_operande(3.0);
    c.pousse_operande(4.0);
    assert_eq!(c.applique_operation("+"), Some(7.0));
}

#[test]
fn division_premier_saisi_divise_par_second() {
    let mut c = Cerveau::new();
    c.pousse_operande(8.0);
    c.pousse_operande(2.0);
    // 8 ÷ 2 = 4, PAS 2 ÷ 8
    assert_eq!(c.applique_operation("÷"), Some(4.0));
}

#[test]
fn soustraction_premier_saisi_moins_second() {
    let mut c = Cerveau::new();
    c.pousse_operande(8.0);
    c.pousse_operande(2.0);
    assert_eq!(c.applique_operation("−"), Some(6.0));
}

#[test]
fn negation_unaire() {
    let mut c = Cerveau::new();
    c.pousse_operande(3.0);
    assert_eq!(c.applique_operation("±"), Some(-3.0));
}

#[test]
fn operandes_insuffisants_donnent_none() {
    let mut c = Cerveau::new();
    c.pousse_operande(5.0);
    assert_eq!(c.applique_operation("−"), None);
}

#[test]
fn symbole_d_operation_inconnu_est_un_no_op() {
    let mut c = Cerveau::new();
    c.pousse_operande(5.0);
    // « tan » n'est pas au registre : rien n'est poussé, rien ne casse
    assert_eq!(c.applique_operation("tan"), Some(5.0));
    assert_eq!(c.description(), "5");
}

/* ------------------------ Constantes et variables ------------------------ */

#[test]
fn pi_se_pousse_et_se_decrit() {
    let mut c = Cerveau::new();
    let r = c.pousse_symbole("π").expect("π est une constante connue");
    assert!(approx(r, std::f64::consts::PI));
    assert_eq!(c.description(), "π");
}

#[test]
fn variable_liee_puis_effacee() {
    let mut c = Cerveau::new();
    c.set_variable("x", Some(5.0));
    assert_eq!(c.pousse_symbole("x"), Some(5.0));

    c.clear_variables();
    assert_eq!(c.evalue(), None);

    // re-pousser après effacement : toujours non liée
    assert_eq!(c.pousse_symbole("x"), None);
}

#[test]
fn lier_apres_la_poussee_suffit() {
    let mut c = Cerveau::new();
    // la référence est résolue À L'ÉVALUATION, pas à la poussée
    assert_eq!(c.pousse_symbole("x"), None);
    assert_eq!(c.set_variable("x", Some(2.0)), Some(2.0));
    assert_eq!(c.set_variable("x", None), None);
}

#[test]
fn clear_pile_ne_touche_pas_aux_variables() {
    let mut c = Cerveau::new();
    c.set_variable("x", Some(1.5));
    c.pousse_symbole("x");
    c.clear_pile();
    assert_eq!(c.description(), "");
    assert_eq!(c.variable("x"), Some(1.5));
}

#[test]
fn clear_pile_idempotent_sur_pile_vide() {
    let mut c = Cerveau::new();
    c.clear_pile();
    c.clear_pile();
    assert_eq!(c.evalue(), None);
    assert_eq!(c.description(), "");
}

/* ------------------------ Annulation ------------------------ */

#[test]
fn retire_un_seul_jeton() {
    let mut c = Cerveau::new();
    c.pousse_operande(3.0);
    c.pousse_operande(4.0);
    c.applique_operation("+");

    // retire le « + » seulement : [3, 4] reste, le sommet vaut 4
    assert_eq!(c.retire_dernier_jeton(), Some(4.0));
    assert_eq!(c.description(), "3,4");
}

#[test]
fn retirer_sur_pile_vide_est_un_no_op() {
    let mut c = Cerveau::new();
    assert_eq!(c.retire_dernier_jeton(), None);
    assert_eq!(c.retire_dernier_jeton(), None);
}

/* ------------------------ Description (historique UI) ------------------------ */

#[test]
fn description_suit_le_calcul() {
    init_traces();
    let mut c = Cerveau::new();
    c.pousse_operande(3.0);
    c.pousse_operande(4.0);
    c.applique_operation("+");
    c.pousse_operande(5.0);
    let r = c.applique_operation("×");

    assert_eq!(c.description(), "(3+4)×5");
    assert_eq!(r, Some(35.0));
}

#[test]
fn description_et_evaluation_restent_en_phase() {
    // même pile, deux vues : la formule affichée correspond au résultat
    let mut c = Cerveau::new();
    c.pousse_operande(9.0);
    c.applique_operation("√");
    c.pousse_operande(2.0);
    c.applique_operation("÷");

    assert_eq!(c.description(), "√(9)÷2");
    assert_eq!(c.evalue(), Some(1.5));
}

/* ------------------------ Domaine IEEE ------------------------ */

#[test]
fn fautes_de_domaine_sortent_en_valeurs_ieee() {
    let mut c = Cerveau::new();
    c.pousse_operande(-1.0);
    let r = c.applique_operation("√").expect("√(-1) est un résultat IEEE, pas None");
    assert!(r.is_nan());

    c.clear_pile();
    c.pousse_operande(1.0);
    c.pousse_operande(0.0);
    let r = c.applique_operation("÷").expect("1 ÷ 0 est un résultat IEEE, pas None");
    assert!(r.is_infinite());
}

/* ------------------------ Propriété : pile fermée => jamais None ------------------------ */

#[test]
fn pile_sans_variables_evalue_toujours() {
    // toutes les opérations de base, chacune avec ses opérandes
    let mut c = Cerveau::new();
    c.pousse_operande(16.0);
    c.applique_operation("√");
    c.pousse_operande(3.0);
    c.applique_operation("×");
    c.pousse_operande(1.0);
    c.applique_operation("−");
    c.pousse_operande(0.0);
    c.applique_operation("cos");
    c.applique_operation("+");
    c.applique_operation("±");
    let r = c.applique_operation("sin");
    assert!(r.is_some(), "pile fermée : le résultat doit exister");
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn stress_chaine_de_sommes_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // L'évaluation est récursive : profondeur ∝ longueur de la chaîne.
    // 400 maillons suffisent pour détecter une régression sans risquer la pile.
    let mut c = Cerveau::new();
    c.pousse_operande(1.0);
    for _ in 0..400 {
        c.pousse_operande(1.0);
        c.applique_operation("+");
        budget(t0, max);
    }

    assert_eq!(c.evalue(), Some(401.0));
    assert!(!c.description().is_empty());
}
