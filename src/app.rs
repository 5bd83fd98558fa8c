// src/app.rs
//
// Module App (racine)
// -------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc et affiche

pub mod etat;
pub mod vue;


pub use etat::AppCalc;
pub use vue::affiche;
