//! Noyau — évaluation des formes postfixe et préfixe
//!
//! Une seule machine à pile, deux sens de lecture :
//! - postfixe : gauche -> droite, 1er dépilé = opérande DROIT
//! - préfixe  : jetons inversés, 1er dépilé = opérande GAUCHE
//!
//! Deux domaines de valeurs via `Valeur` :
//! - f64 : sémantique IEEE (x/0 => inf ou NaN, jamais d’erreur)
//! - BigRational : exact, division par zéro, exposant non entier ou trop grand => erreur

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use tracing::{debug, trace};

use super::erreur::ErreurNoyau;
use super::jetons::{eclate, Operateur};
use super::suite::SuiteJetons;

/// Garde-fou : taille max (en bits) d’une puissance exacte (anti-gel sur 9^9^9).
pub const MAX_BITS_PUISSANCE: u64 = 1 << 20;

/// Domaine numérique d’évaluation.
pub trait Valeur: Sized + fmt::Display {
    /// `None` si le jeton n’est pas un nombre.
    fn depuis_jeton(jeton: &str) -> Option<Self>;

    fn applique(op: Operateur, gauche: Self, droite: Self) -> Result<Self, ErreurNoyau>;
}

impl Valeur for f64 {
    fn depuis_jeton(jeton: &str) -> Option<Self> {
        jeton.parse().ok()
    }

    fn applique(op: Operateur, gauche: Self, droite: Self) -> Result<Self, ErreurNoyau> {
        Ok(match op {
            Operateur::Plus => gauche + droite,
            Operateur::Moins => gauche - droite,
            Operateur::Fois => gauche * droite,
            Operateur::Divise => gauche / droite,
            Operateur::Puissance => gauche.powf(droite),
        })
    }
}

impl Valeur for BigRational {
    fn depuis_jeton(jeton: &str) -> Option<Self> {
        jeton.parse::<BigInt>().ok().map(BigRational::from_integer)
    }

    fn applique(op: Operateur, gauche: Self, droite: Self) -> Result<Self, ErreurNoyau> {
        match op {
            Operateur::Plus => Ok(gauche + droite),
            Operateur::Moins => Ok(gauche - droite),
            Operateur::Fois => Ok(gauche * droite),
            Operateur::Divise => {
                if droite.is_zero() {
                    return Err(ErreurNoyau::DivisionParZero);
                }
                Ok(gauche / droite)
            }
            Operateur::Puissance => {
                // exposant entier seulement
                if !droite.is_integer() {
                    return Err(ErreurNoyau::ExposantNonEntier);
                }
                let n = droite.to_integer();
                if n.is_negative() && gauche.is_zero() {
                    return Err(ErreurNoyau::DivisionParZero);
                }

                // base 0 ou ±1 : résultat trivial, pas de borne de taille
                let triviale = gauche.is_zero()
                    || (gauche.denom().is_one() && gauche.numer().magnitude().is_one());
                if !triviale {
                    let bits = gauche.numer().bits().max(gauche.denom().bits());
                    let taille = n.magnitude().to_u64().and_then(|m| m.checked_mul(bits));
                    if !taille.is_some_and(|t| t <= MAX_BITS_PUISSANCE) {
                        return Err(ErreurNoyau::ExposantTropGrand);
                    }
                }

                let n = n.to_i32().ok_or(ErreurNoyau::ExposantTropGrand)?;
                Ok(gauche.pow(n))
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Ordre {
    Postfixe,
    Prefixe,
}

/// Machine à pile commune. `jetons` arrive déjà dans l’ordre de lecture,
/// chaque jeton accompagné de sa position d’origine (pour les messages).
fn reduit<V: Valeur>(
    jetons: impl Iterator<Item = (usize, String)>,
    ordre: Ordre,
) -> Result<V, ErreurNoyau> {
    let mut st: Vec<V> = Vec::new();

    for (position, jeton) in jetons {
        if let Some(v) = V::depuis_jeton(&jeton) {
            st.push(v);
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
        let premier = st.pop().ok_or_else(sous_pile)?;
        let second = st.pop().ok_or_else(sous_pile)?;

        let (gauche, droite) = match ordre {
            Ordre::Postfixe => (second, premier),
            Ordre::Prefixe => (premier, second),
        };
        trace!(op = %op.symbole(), %gauche, %droite, "réduction");
        st.push(V::applique(op, gauche, droite)?);
    }

    match st.len() {
        0 => Err(ErreurNoyau::EntreeVide),
        1 => st.pop().ok_or(ErreurNoyau::EntreeVide),
        restants => Err(ErreurNoyau::OperandesEnTrop { restants }),
    }
}

fn reduit_postfix<V: Valeur>(postfix: &SuiteJetons) -> Result<V, ErreurNoyau> {
    let jetons = postfix.materialise().into_iter().enumerate();
    let v = reduit(jetons, Ordre::Postfixe)?;
    debug!(postfix = %postfix, resultat = %v, "évaluation postfixe");
    Ok(v)
}

fn reduit_prefix<V: Valeur>(prefix: &SuiteJetons) -> Result<V, ErreurNoyau> {
    // "+3*42" => + 3 * 4 2 => lu à l’envers : 2 4 * 3 +
    let materialise = prefix.materialise();
    let jetons: Vec<(usize, String)> = materialise
        .iter()
        .flat_map(|j| eclate(j))
        .enumerate()
        .collect();
    let v = reduit(jetons.into_iter().rev(), Ordre::Prefixe)?;
    debug!(prefixe = %prefix, resultat = %v, "évaluation préfixe");
    Ok(v)
}

/* ------------------------ API publique ------------------------ */

pub fn evaluate_postfix(postfix: &SuiteJetons) -> Result<f64, ErreurNoyau> {
    reduit_postfix(postfix)
}

pub fn evaluate_prefix(prefix: &SuiteJetons) -> Result<f64, ErreurNoyau> {
    reduit_prefix(prefix)
}

/// Variante exacte (rationnels) de `evaluate_postfix`.
pub fn evaluate_postfix_exact(postfix: &SuiteJetons) -> Result<BigRational, ErreurNoyau> {
    reduit_postfix(postfix)
}

/// Variante exacte (rationnels) de `evaluate_prefix`.
pub fn evaluate_prefix_exact(prefix: &SuiteJetons) -> Result<BigRational, ErreurNoyau> {
    reduit_prefix(prefix)
}
