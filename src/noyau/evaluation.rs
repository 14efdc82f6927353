// src/noyau/evaluation.rs
//
// Évaluation récursive de la pile-programme.
//
// La récursion consomme la QUEUE de la tranche (dernier jeton poussé) et
// redescend vers la tête. Chaque appel prend une tranche explicite et
// retourne (résultat, tranche restante) : purement fonctionnel, testable
// sans instance de cerveau.
//
// Sémantique numérique : IEEE double. Division par zéro et √ d'un négatif
// donnent inf/NaN et sortent comme des résultats ORDINAIRES. `None` ne
// signifie que : variable non liée, ou pas assez d'opérandes.

use std::collections::HashMap;

use super::jetons::Jeton;

/// Évalue une tranche de pile en consommant sa queue.
///
/// Retourne (résultat, reste non consommé). Le reste est la partie de la
/// pile SOUS l'expression consommée — normalement d'anciennes expressions
/// complètes (plusieurs « entrées » successives).
pub fn evalue_jetons<'a>(
    jetons: &'a [Jeton],
    variables: &HashMap<String, f64>,
    constantes: &HashMap<String, f64>,
) -> (Option<f64>, &'a [Jeton]) {
    let (dernier, reste) = match jetons.split_last() {
        Some(x) => x,
        None => return (None, jetons),
    };

    match dernier {
        Jeton::Operande(v) => (Some(*v), reste),

        // non liée => None (l'appelant décide quoi afficher)
        Jeton::Variable(nom) => (variables.get(nom).copied(), reste),
        Jeton::Constante(nom) => (constantes.get(nom).copied(), reste),

        Jeton::Unaire(_, f) => {
            // même en cas d'échec, les jetons consommés RESTENT consommés
            let (x, reste2) = evalue_jetons(reste, variables, constantes);
            (x.map(f), reste2)
        }

        Jeton::Binaire(_, f) => {
            let (premier, reste2) = evalue_jetons(reste, variables, constantes);
            let premier = match premier {
                Some(v) => v,
                None => return (None, reste2),
            };
            let (second, reste3) = evalue_jetons(reste2, variables, constantes);
            let second = match second {
                Some(v) => v,
                None => return (None, reste3),
            };
            // contrat du registre : f(premier_depile, second_depile)
            (Some(f(premier, second)), reste3)
        }
    }
}
