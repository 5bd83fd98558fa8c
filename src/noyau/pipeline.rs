//! Noyau — pipeline complet
//!
//! infixe -> postfixe -> valeur
//!           postfixe -> préfixe -> valeur
//!
//! Aucun état partagé entre deux appels : chaque étape construit ses propres piles.

use num_rational::BigRational;
use tracing::info;

use super::erreur::ErreurNoyau;
use super::eval::{evaluate_postfix, evaluate_postfix_exact, evaluate_prefix, evaluate_prefix_exact};
use super::rpn::{infix_to_postfix_with, postfix_to_prefix, ReglesConversion};
use super::suite::SuiteJetons;

#[derive(Clone, Copy, Debug, Default)]
pub struct OptionsPipeline {
    pub regles: ReglesConversion,
    /// Calcule aussi les valeurs exactes (rationnels).
    pub exact: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValeursExactes {
    pub postfix: BigRational,
    pub prefixe: BigRational,
}

/// Tout ce qu’un passage produit, étape par étape.
#[derive(Clone, Debug)]
pub struct DemarcheNoyau {
    pub infixe: String,
    pub postfix: SuiteJetons,
    pub valeur_postfix: f64,
    pub prefixe: SuiteJetons,
    pub valeur_prefixe: f64,
    /// None si le mode exact n’est pas demandé. Une faute exacte (division par zéro)
    /// n’annule pas les valeurs f64.
    pub exact: Option<Result<ValeursExactes, ErreurNoyau>>,
}

pub fn run_pipeline(expression: &str, options: OptionsPipeline) -> Result<DemarcheNoyau, ErreurNoyau> {
    let s = expression.trim();
    if s.is_empty() {
        return Err(ErreurNoyau::EntreeVide);
    }

    let postfix = infix_to_postfix_with(s, options.regles);
    let valeur_postfix = evaluate_postfix(&postfix)?;

    let prefixe = postfix_to_prefix(&postfix)?;
    let valeur_prefixe = evaluate_prefix(&prefixe)?;

    let exact = options.exact.then(|| -> Result<ValeursExactes, ErreurNoyau> {
        Ok(ValeursExactes {
            postfix: evaluate_postfix_exact(&postfix)?,
            prefixe: evaluate_prefix_exact(&prefixe)?,
        })
    });

    info!(infixe = s, %postfix, %prefixe, valeur_postfix, valeur_prefixe, "pipeline terminé");

    Ok(DemarcheNoyau {
        infixe: s.to_string(),
        postfix,
        valeur_postfix,
        prefixe,
        valeur_prefixe,
        exact,
    })
}
