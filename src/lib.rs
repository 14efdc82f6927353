// src/lib.rs
//
// Cerveau RPN — noyau d'une calculatrice tactile
// ----------------------------------------------
// But:
// - Pile-programme postfixée (opérandes, variables, constantes, opérations)
// - Évaluation récursive + description infixe (précédences, parenthèses)
// - AUCUNE UI ici : l'hôte (boutons, affichage, traceur de courbes) consomme
//   l'API étroite du cerveau et reste seul responsable du rendu.
//
// IMPORTANT (structure projet):
// - Tout le noyau vit dans src/noyau/ ; lib.rs ne fait que réexporter.
// - Un seul appelant logique à la fois : pas de synchronisation interne.

pub mod noyau;

pub use noyau::cerveau::Cerveau;
pub use noyau::jetons::Jeton;
pub use noyau::operations::RegistreOperations;
pub use noyau::programme::{
    echantillonne, programme_depuis_json, programme_en_json, JetonProgramme,
};
