//! Noyau notation polonaise
//!
//! Organisation interne :
//! - jetons.rs   : classification (opérande / opérateur / précédence)
//! - suite.rs    : suite ordonnée de jetons (ajout en fin seulement)
//! - rpn.rs      : infix -> postfix (shunting-yard restreint) + postfix -> préfixe
//! - eval.rs     : évaluation postfixe / préfixe (f64 ou rationnels exacts)
//! - erreur.rs   : fautes (pile vide, opérande non numérique...)
//! - format.rs   : affichage des valeurs
//! - pipeline.rs : enchaînement complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod pipeline;
pub mod rpn;
pub mod suite;



// API publique minimale
pub use erreur::ErreurNoyau;
pub use pipeline::{run_pipeline, DemarcheNoyau, OptionsPipeline};
pub use suite::SuiteJetons;
