// src/noyau/rpn.rs
//
// Shunting-yard restreint (infix -> RPN) + réécriture RPN -> préfixe.
//
// Règles:
// - opérande (chiffre ou lettre) : sortie directe
// - opérateur : dépile tant que precedence(sommet) >= precedence(courant), puis empile
// - tout autre caractère (espaces, parenthèses...) : ignoré, sans erreur
//
// NOTE:
// - Par défaut `^` est traité comme les autres (associatif à gauche) :
//   "2^3^2" => "2 3 ^ 2 ^". `ReglesConversion::exposant_droite` donne la forme usuelle.

use tracing::{debug, trace};

use super::erreur::ErreurNoyau;
use super::jetons::{est_numerique, is_operand, Operateur};
use super::suite::SuiteJetons;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReglesConversion {
    /// `^` associatif à droite : on ne dépile que sur précédence strictement plus forte.
    pub exposant_droite: bool,
}

impl ReglesConversion {
    fn doit_depiler(self, sommet: Operateur, courant: Operateur) -> bool {
        let (p_top, p_tok) = (sommet.precedence(), courant.precedence());
        if self.exposant_droite && courant == Operateur::Puissance {
            p_top > p_tok
        } else {
            p_top >= p_tok
        }
    }
}

/// Convertit une expression infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   "3+4*2" => 3 4 2 * +
pub fn infix_to_postfix(expression: &str) -> SuiteJetons {
    infix_to_postfix_with(expression, ReglesConversion::default())
}

pub fn infix_to_postfix_with(expression: &str, regles: ReglesConversion) -> SuiteJetons {
    let mut out = SuiteJetons::new();
    let mut ops: Vec<Operateur> = Vec::new();

    for c in expression.chars() {
        if is_operand(c) {
            out.push(c);
        } else if let Some(op) = Operateur::depuis_char(c) {
            while let Some(&top) = ops.last() {
                if !regles.doit_depiler(top, op) {
                    break;
                }
                ops.pop();
                out.push(top.symbole());
            }
            ops.push(op);
        } else {
            trace!(caractere = %c, "caractère ignoré");
        }
    }

    // vide la pile ops (ordre LIFO)
    while let Some(op) = ops.pop() {
        out.push(op.symbole());
    }

    debug!(infixe = expression, postfix = %out, "infix -> postfix");
    out
}

/// Réécrit une RPN en préfixe : un seul jeton, sans séparateur ni parenthèse.
///
/// Exemple:
///   3 4 2 * +  =>  ["+3*42"]
pub fn postfix_to_prefix(postfix: &SuiteJetons) -> Result<SuiteJetons, ErreurNoyau> {
    let mut st: Vec<String> = Vec::new();

    for (position, jeton) in postfix.materialise().into_iter().enumerate() {
        if est_numerique(&jeton) {
            st.push(jeton);
            continue;
        }

        let op = Operateur::depuis_jeton(&jeton).ok_or_else(|| {
            ErreurNoyau::OperandeNonNumerique {
                jeton: jeton.clone(),
                position,
            }
        })?;

        let sous_pile = || ErreurNoyau::PileVide {
            jeton: jeton.clone(),
            position,
        };
        let droite = st.pop().ok_or_else(sous_pile)?;
        let gauche = st.pop().ok_or_else(sous_pile)?;

        let mut exp = String::with_capacity(1 + gauche.len() + droite.len());
        exp.push(op.symbole());
        exp.push_str(&gauche);
        exp.push_str(&droite);
        trace!(%exp, "réduction préfixe");
        st.push(exp);
    }

    let prefixe = match st.len() {
        0 => return Err(ErreurNoyau::EntreeVide),
        1 => st.pop().ok_or(ErreurNoyau::EntreeVide)?,
        restants => return Err(ErreurNoyau::OperandesEnTrop { restants }),
    };

    debug!(postfix = %postfix, %prefixe, "postfix -> préfixe");
    Ok(std::iter::once(prefixe).collect())
}
