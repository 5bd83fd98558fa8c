//! src/app/etat.rs
//!
//! État d’une exécution (sans affichage).
//!
//! Rôle : garder l’entrée, les options du pipeline, et le dernier résultat
//! (démarche complète ou faute). L’écriture est faite par vue.rs.

use crate::noyau::{run_pipeline, DemarcheNoyau, ErreurNoyau, OptionsPipeline};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- paramètres ---
    pub options: OptionsPipeline,

    // --- sorties ---
    pub demarche: Option<DemarcheNoyau>,
    pub erreur: Option<ErreurNoyau>,
}

impl AppCalc {
    pub fn new(options: OptionsPipeline) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Lance le pipeline sur `entree` et dépose le résultat (ou la faute).
    ///
    /// La faute est aussi renvoyée : main décide du code de sortie.
    pub fn evalue(&mut self, entree: impl Into<String>) -> Result<&DemarcheNoyau, ErreurNoyau> {
        self.entree = entree.into();
        self.clear_resultats();

        match run_pipeline(&self.entree, self.options) {
            Ok(d) => Ok(&*self.demarche.insert(d)),
            Err(e) => {
                self.erreur = Some(e.clone());
                Err(e)
            }
        }
    }

    /// CLR : effacer résultats + erreur (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.demarche = None;
        self.erreur = None;
    }
}
