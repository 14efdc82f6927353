// src/noyau/programme.rs
//
// Instantané sérialisable du programme (la pile, sans les pointeurs de
// fonction) pour un consommateur secondaire — typiquement un traceur de
// courbes qui réévalue le même programme en faisant varier UNE variable.
//
// Le descripteur ne transporte que des données ; à la restauration, les
// symboles d'opération sont résolus contre le registre du cerveau cible.
// Symbole inconnu => Err (programme corrompu : faute de contrat, pas une
// erreur utilisateur).

use serde::{Deserialize, Serialize};

use super::cerveau::Cerveau;
use super::jetons::Jeton;
use super::operations::RegistreOperations;

/// Un jeton « à plat » : ce que l'on peut écrire sur le fil.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum JetonProgramme {
    Operande(f64),
    Variable(String),
    Constante(String),
    Operation(String),
}

impl JetonProgramme {
    pub fn depuis_jeton(jeton: &Jeton) -> Self {
        match jeton {
            Jeton::Operande(v) => JetonProgramme::Operande(*v),
            Jeton::Variable(nom) => JetonProgramme::Variable(nom.clone()),
            Jeton::Constante(nom) => JetonProgramme::Constante(nom.clone()),
            Jeton::Unaire(sym, _) | Jeton::Binaire(sym, _) => {
                JetonProgramme::Operation(sym.clone())
            }
        }
    }

    /// Reconstruit le jeton exécutable, en résolvant les opérations
    /// contre `registre`.
    pub fn en_jeton(&self, registre: &RegistreOperations) -> Result<Jeton, String> {
        match self {
            JetonProgramme::Operande(v) => Ok(Jeton::Operande(*v)),
            JetonProgramme::Variable(nom) => Ok(Jeton::Variable(nom.clone())),
            JetonProgramme::Constante(nom) => Ok(Jeton::Constante(nom.clone())),
            JetonProgramme::Operation(sym) => registre
                .operation(sym)
                .cloned()
                .ok_or_else(|| format!("opération inconnue dans le programme: '{sym}'")),
        }
    }
}

impl Cerveau {
    /// Instantané du programme courant (copie à plat de la pile).
    pub fn programme(&self) -> Vec<JetonProgramme> {
        self.pile().iter().map(JetonProgramme::depuis_jeton).collect()
    }

    /// Remplace la pile par un programme restauré.
    /// Tout-ou-rien : si un symbole d'opération est inconnu, la pile
    /// actuelle n'est pas touchée.
    pub fn charge_programme(&mut self, programme: &[JetonProgramme]) -> Result<(), String> {
        let pile = programme
            .iter()
            .map(|j| j.en_jeton(self.registre()))
            .collect::<Result<Vec<_>, _>>()?;
        self.remplace_pile(pile);
        Ok(())
    }
}

/* ------------------------ JSON (fil vers le traceur) ------------------------ */

pub fn programme_en_json(programme: &[JetonProgramme]) -> Result<String, String> {
    serde_json::to_string(programme).map_err(|e| format!("sérialisation JSON: {e}"))
}

pub fn programme_depuis_json(texte: &str) -> Result<Vec<JetonProgramme>, String> {
    serde_json::from_str(texte).map_err(|e| format!("lecture JSON: {e}"))
}

/* ------------------------ Échantillonnage (courbe) ------------------------ */

/// Réévalue le programme courant pour chaque valeur de `valeurs` liée à la
/// variable `nom` (le « y pour x » du traceur). La liaison précédente de
/// `nom` est restaurée à la fin, valeur par valeur absente comprise.
pub fn echantillonne(cerveau: &mut Cerveau, nom: &str, valeurs: &[f64]) -> Vec<Option<f64>> {
    let liaison_avant = cerveau.variable(nom);

    let mut sorties = Vec::with_capacity(valeurs.len());
    for &x in valeurs {
        sorties.push(cerveau.set_variable(nom, Some(x)));
    }

    cerveau.set_variable(nom, liaison_avant);
    sorties
}
