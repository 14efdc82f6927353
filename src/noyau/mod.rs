//! Noyau RPN du cerveau
//!
//! Organisation interne :
//! - jetons.rs      : type Jeton (pile-programme) + formatage
//! - operations.rs  : registre des opérations connues + table de précédence
//! - evaluation.rs  : évaluation récursive (queue → tête)
//! - description.rs : rendu infixe (précédences, parenthèses, placeholders)
//! - cerveau.rs     : API de mutation de pile + magasins variables/constantes
//! - programme.rs   : instantané sérialisable du programme (traceur, etc.)

pub mod cerveau;
pub mod description;
pub mod evaluation;
pub mod jetons;
pub mod operations;
pub mod programme;

#[cfg(test)]
mod tests_cerveau;

// API publique minimale
pub use cerveau::Cerveau;
