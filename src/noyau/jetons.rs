// src/noyau/jetons.rs

use std::fmt;

/// Un jeton de la pile-programme (ordre postfixé).
///
/// - `Operande`  : valeur flottante, poussée telle quelle
/// - `Variable`  : nom résolu contre le magasin de variables À L'ÉVALUATION
/// - `Constante` : nom résolu contre le magasin de constantes (π, …)
/// - `Unaire` / `Binaire` : symbole d'affichage + fonction numérique pure
///
/// Les fonctions sont des pointeurs `fn` (pas de capture) : le jeton reste
/// clonable et la pile peut être copiée librement (annulation, instantané).
#[derive(Clone, Debug)]
pub enum Jeton {
    Operande(f64),
    Variable(String),
    Constante(String),
    Unaire(String, fn(f64) -> f64),
    Binaire(String, fn(f64, f64) -> f64),
}

impl Jeton {
    /// Symbole d'affichage du jeton.
    /// Pour une opération, c'est aussi sa clé dans le registre.
    pub fn symbole(&self) -> String {
        match self {
            Jeton::Operande(v) => format_operande(*v),
            Jeton::Variable(nom) | Jeton::Constante(nom) => nom.clone(),
            Jeton::Unaire(sym, _) | Jeton::Binaire(sym, _) => sym.clone(),
        }
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbole())
    }
}

/// Format d'un opérande : le plus court qui survit à l'aller-retour texte→f64.
/// (3.0 s'affiche "3", 0.5 s'affiche "0.5".)
pub fn format_operande(v: f64) -> String {
    format!("{v}")
}

/// Format utilitaire (debug/trace) : pile de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(Jeton::symbole)
        .collect::<Vec<_>>()
        .join(" ")
}
