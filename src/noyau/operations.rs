// src/noyau/operations.rs
//
// Registre des opérations connues + table de précédence.
//
// Règles:
// - Un symbole d'affichage => AU PLUS UN jeton-modèle enregistré.
// - Le registre est rempli UNE FOIS à la construction, jamais muté ensuite
//   (possédé par l'instance : deux cerveaux restent indépendants).
// - Précédence inconnue => RANG_MAX, c.-à-d. atomique, jamais parenthésé.

use std::collections::HashMap;

use super::jetons::Jeton;

/// Rang des opérations qui lient fort (×, ÷).
pub const RANG_HAUT: i32 = 10;

/// Rang des opérations qui lient faible (+, −).
pub const RANG_BAS: i32 = 5;

/// Rang « atomique » : opérandes, références, applications unaires,
/// symboles sans rang déclaré. Jamais parenthésé au rendu.
pub const RANG_MAX: i32 = i32::MAX;

#[derive(Clone, Debug, Default)]
pub struct RegistreOperations {
    connues: HashMap<String, Jeton>,
    precedences: HashMap<String, i32>,
}

impl RegistreOperations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registre de base de la calculatrice : ×, ÷, +, −, √, sin, cos, ±.
    ///
    /// IMPORTANT (ordre LIFO) : les opérandes sont dépilés dans l'ordre
    /// inverse de leur saisie. Pour ÷ et −, la fonction reçoit
    /// (premier_depile, second_depile) et doit calculer
    /// second_depile OP premier_depile, sinon « 8 ÷ 2 » vaudrait 0.25.
    pub fn operations_de_base() -> Self {
        let mut r = Self::new();

        r.apprend_operation(Jeton::Binaire("×".to_string(), |a, b| a * b));
        r.apprend_operation(Jeton::Binaire("÷".to_string(), |a, b| b / a));
        r.apprend_operation(Jeton::Binaire("+".to_string(), |a, b| a + b));
        r.apprend_operation(Jeton::Binaire("−".to_string(), |a, b| b - a));

        r.apprend_operation(Jeton::Unaire("√".to_string(), f64::sqrt));
        r.apprend_operation(Jeton::Unaire("sin".to_string(), f64::sin));
        r.apprend_operation(Jeton::Unaire("cos".to_string(), f64::cos));
        r.apprend_operation(Jeton::Unaire("±".to_string(), |x| -x));

        r.apprend_precedence("×", RANG_HAUT);
        r.apprend_precedence("÷", RANG_HAUT);
        r.apprend_precedence("+", RANG_BAS);
        r.apprend_precedence("−", RANG_BAS);

        r
    }

    /// Insère ou remplace l'opération sous son symbole d'affichage.
    pub fn apprend_operation(&mut self, op: Jeton) {
        self.connues.insert(op.symbole(), op);
    }

    /// Fixe (ou écrase) le rang de liaison d'un symbole binaire.
    pub fn apprend_precedence(&mut self, symbole: &str, rang: i32) {
        self.precedences.insert(symbole.to_string(), rang);
    }

    /// Jeton-modèle associé à un symbole, s'il existe.
    pub fn operation(&self, symbole: &str) -> Option<&Jeton> {
        self.connues.get(symbole)
    }

    /// Rang de liaison d'un symbole ; inconnu => RANG_MAX (atomique).
    pub fn precedence(&self, symbole: &str) -> i32 {
        self.precedences.get(symbole).copied().unwrap_or(RANG_MAX)
    }
}
