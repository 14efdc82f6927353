// src/noyau/cerveau.rs
//
// Le cerveau : pile-programme + registre d'opérations + magasins.
//
// Contrats :
// - Toute mutation réévalue la pile et retourne le résultat (Option<f64>).
// - Erreur utilisateur ordinaire (variable non liée, pile trop courte,
//   symbole inconnu) => None ou no-op, JAMAIS de panique.
// - Un seul appelant logique à la fois : aucune synchronisation interne,
//   l'hôte sérialise les appels s'il est concurrent.

use std::collections::HashMap;

use log::debug;

use super::description::decrit_tout;
use super::evaluation::evalue_jetons;
use super::jetons::{format_jetons, Jeton};
use super::operations::RegistreOperations;

pub struct Cerveau {
    pile: Vec<Jeton>,
    registre: RegistreOperations,
    variables: HashMap<String, f64>,
    constantes: HashMap<String, f64>,
}

impl Default for Cerveau {
    fn default() -> Self {
        Self::new()
    }
}

impl Cerveau {
    /// Cerveau prêt à l'emploi : registre de base + constante π.
    /// Registre et constantes sont remplis ICI, une seule fois —
    /// plus aucune mutation de l'un ou l'autre ensuite.
    pub fn new() -> Self {
        let mut constantes = HashMap::new();
        constantes.insert("π".to_string(), std::f64::consts::PI);

        Cerveau {
            pile: Vec::new(),
            registre: RegistreOperations::operations_de_base(),
            variables: HashMap::new(),
            constantes,
        }
    }

    /* ------------------------ Mutations de pile ------------------------ */

    /// Pousse une valeur, puis réévalue.
    pub fn pousse_operande(&mut self, valeur: f64) -> Option<f64> {
        self.pile.push(Jeton::Operande(valeur));
        self.evalue()
    }

    /// Pousse un nom : constante s'il est déjà dans le magasin de
    /// constantes, sinon référence de variable.
    pub fn pousse_symbole(&mut self, nom: &str) -> Option<f64> {
        if self.constantes.contains_key(nom) {
            self.pile.push(Jeton::Constante(nom.to_string()));
        } else {
            self.pile.push(Jeton::Variable(nom.to_string()));
        }
        self.evalue()
    }

    /// Applique une opération par son symbole d'affichage.
    /// Symbole inconnu => no-op (l'UI ne devrait envoyer que des symboles
    /// connus, mais le cerveau ne casse rien si elle se trompe).
    pub fn applique_operation(&mut self, symbole: &str) -> Option<f64> {
        if let Some(op) = self.registre.operation(symbole) {
            self.pile.push(op.clone());
        }
        self.evalue()
    }

    /// Annulation : retire EXACTEMENT UN jeton (la dernière poussée),
    /// pas toute une sous-expression. Pile vide => no-op, None.
    pub fn retire_dernier_jeton(&mut self) -> Option<f64> {
        if self.pile.pop().is_some() {
            self.evalue()
        } else {
            None
        }
    }

    /// Vide la pile-programme. Ne touche PAS aux variables.
    pub fn clear_pile(&mut self) {
        self.pile.clear();
    }

    /// Vide le magasin de variables. Ne touche PAS à la pile.
    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    /// Fixe (Some) ou efface (None) une variable, puis réévalue.
    pub fn set_variable(&mut self, nom: &str, valeur: Option<f64>) -> Option<f64> {
        match valeur {
            Some(v) => {
                self.variables.insert(nom.to_string(), v);
            }
            None => {
                self.variables.remove(nom);
            }
        }
        self.evalue()
    }

    /// Valeur actuellement liée à une variable, si elle existe.
    pub fn variable(&self, nom: &str) -> Option<f64> {
        self.variables.get(nom).copied()
    }

    /* ------------------------ Vues dérivées ------------------------ */

    /// Évalue la pile entière et retourne le résultat du sommet.
    /// Le reste (expressions complètes plus anciennes) est ignoré ici —
    /// il reste sur la pile, visible dans `description()`.
    pub fn evalue(&self) -> Option<f64> {
        let (resultat, reste) = evalue_jetons(&self.pile, &self.variables, &self.constantes);
        if let Some(r) = resultat {
            debug!(
                "[{}] = {r} ; reste [{}]",
                format_jetons(&self.pile),
                format_jetons(reste)
            );
        }
        resultat
    }

    /// Description infixe de toute la pile (historique pour l'UI).
    pub fn description(&self) -> String {
        decrit_tout(&self.pile, &self.registre)
    }

    /* ------------------------ Accès internes (noyau) ------------------------ */

    pub(crate) fn pile(&self) -> &[Jeton] {
        &self.pile
    }

    pub(crate) fn registre(&self) -> &RegistreOperations {
        &self.registre
    }

    pub(crate) fn remplace_pile(&mut self, pile: Vec<Jeton>) {
        self.pile = pile;
    }
}
