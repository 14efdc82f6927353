// src/noyau/description.rs
//
// Reconstruction d'une description infixe lisible depuis la pile postfixée.
//
// MIROIR STRICT de evaluation.rs : même ordre de dépilage, même consommation.
// Si l'un change, l'autre doit changer, sinon la formule affichée ne
// correspond plus au résultat calculé.
//
// Parenthèses : un côté est parenthésé si (et seulement si) son propre rendu
// est une application binaire de rang inférieur ou égal au rang de
// l'opération courante. Opérandes, références et applications unaires sont
// atomiques (RANG_MAX), jamais parenthésés.
//
// Piles partielles : placeholders déterministes, consommation monotone.
// - opérande gauche introuvable  => « ?sym? » (pas de récursion à droite)
// - opérande droit seul manquant => « ?sym(texte) »

use super::jetons::{format_operande, Jeton};
use super::operations::{RegistreOperations, RANG_MAX};

/// Séparateur entre expressions complètes coexistant sur la pile.
const SEPARATEUR: &str = ",";

/// Un sous-rendu : le texte produit + le rang effectif de sa racine.
#[derive(Clone, Debug)]
struct Rendu {
    texte: String,
    rang: i32,
}

impl Rendu {
    fn atome(texte: String) -> Self {
        Rendu {
            texte,
            rang: RANG_MAX,
        }
    }
}

/// Décrit TOUTE la pile : une description par expression complète,
/// jointes par `,` (la consommation va de la queue vers la tête, donc
/// chaque morceau découvert est PRÉFIXÉ — il est logiquement plus ancien).
pub fn decrit_tout(jetons: &[Jeton], registre: &RegistreOperations) -> String {
    let mut parties: Vec<String> = Vec::new();
    let mut reste = jetons;

    while !reste.is_empty() {
        let (rendu, nouveau_reste) = decrit_jetons(reste, registre);
        if let Some(r) = rendu {
            parties.insert(0, r.texte);
        }
        reste = nouveau_reste;
    }

    parties.join(SEPARATEUR)
}

/// Décrit UNE expression en consommant la queue de la tranche.
fn decrit_jetons<'a>(
    jetons: &'a [Jeton],
    registre: &RegistreOperations,
) -> (Option<Rendu>, &'a [Jeton]) {
    let (dernier, reste) = match jetons.split_last() {
        Some(x) => x,
        None => return (None, jetons),
    };

    match dernier {
        Jeton::Operande(v) => (Some(Rendu::atome(format_operande(*v))), reste),
        Jeton::Variable(nom) | Jeton::Constante(nom) => {
            (Some(Rendu::atome(nom.clone())), reste)
        }

        Jeton::Unaire(sym, _) => {
            let (x, reste2) = decrit_jetons(reste, registre);
            let texte = match x {
                Some(r) => format!("{sym}({})", r.texte),
                None => format!("{sym}(?)"),
            };
            (Some(Rendu::atome(texte)), reste2)
        }

        Jeton::Binaire(sym, _) => {
            let rang = registre.precedence(sym);

            let (premier, reste2) = decrit_jetons(reste, registre);
            let premier = match premier {
                Some(r) => r,
                // opérande gauche introuvable : on n'insiste pas à droite
                None => {
                    let texte = format!("?{sym}?");
                    return (Some(Rendu { texte, rang }), reste2);
                }
            };

            let (second, reste3) = decrit_jetons(reste2, registre);
            let texte = match second {
                Some(second) => {
                    // ordre infixe conventionnel : le second évalué est à gauche
                    format!(
                        "{}{sym}{}",
                        parenthese(&second, rang),
                        parenthese(&premier, rang)
                    )
                }
                None => format!("?{sym}({})", premier.texte),
            };

            (Some(Rendu { texte, rang }), reste3)
        }
    }
}

/// Pose des parenthèses autour d'un côté qui lie moins fort (ou aussi fort)
/// que l'opération courante. Les atomes (RANG_MAX) passent nus.
fn parenthese(cote: &Rendu, rang_courant: i32) -> String {
    if cote.rang != RANG_MAX && cote.rang <= rang_courant {
        format!("({})", cote.texte)
    } else {
        cote.texte.clone()
    }
}
