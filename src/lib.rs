//! # calculatrice_rpn
//!
//! Notations d’une expression arithmétique à jetons d’un caractère :
//! infixe -> postfixe (RPN) -> préfixe, avec évaluation des deux formes.
//!
//! ```
//! use calculatrice_rpn::noyau::eval::evaluate_postfix;
//! use calculatrice_rpn::noyau::rpn::infix_to_postfix;
//!
//! let postfix = infix_to_postfix("3+4*2");
//! assert_eq!(postfix.to_string(), "3 4 2 * +");
//! assert_eq!(evaluate_postfix(&postfix), Ok(11.0));
//! ```

/// Console : état d’une exécution + rendu texte.
pub mod app;
/// Noyau pur : classification, conversions, évaluations.
pub mod noyau;
