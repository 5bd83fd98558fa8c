// src/app/vue.rs
//
// Vue console
// -----------
// - `affiche` : la suite matérialisée, jetons séparés par une espace, puis fin de ligne
// - `AppCalc::rend` : postfixe, valeur, préfixe, valeur (+ valeurs exactes si demandé)
// - `AppCalc::rend_erreur` : la faute du dernier passage (stderr en vrai)
//
// Note :
// - Écrit dans n’importe quel `Write` (stdout en vrai, Vec<u8> en test).
// - Les journaux passent par tracing (stderr), jamais ici.

use std::io::{self, Write};

use super::etat::AppCalc;
use crate::noyau::format::{format_f64, format_rat};
use crate::noyau::SuiteJetons;

/// Opération d’affichage : "3 4 2 * +\n".
pub fn affiche(suite: &SuiteJetons, out: &mut impl Write) -> io::Result<()> {
    let jetons = suite.materialise();
    writeln!(out, "{}", jetons.join(" "))
}

impl AppCalc {
    /// Rendu du dernier résultat. Rien n’est écrit s’il n’y en a pas.
    pub fn rend(&self, out: &mut impl Write) -> io::Result<()> {
        let Some(d) = &self.demarche else {
            return Ok(());
        };

        write!(out, "Postfixe : ")?;
        affiche(&d.postfix, out)?;
        writeln!(out, "Valeur postfixe : {}", format_f64(d.valeur_postfix))?;

        write!(out, "Préfixe : ")?;
        affiche(&d.prefixe, out)?;
        writeln!(out, "Valeur préfixe : {}", format_f64(d.valeur_prefixe))?;

        match &d.exact {
            None => {}
            Some(Ok(v)) => {
                writeln!(out, "Exact postfixe : {}", format_rat(&v.postfix))?;
                writeln!(out, "Exact préfixe : {}", format_rat(&v.prefixe))?;
            }
            Some(Err(e)) => writeln!(out, "Exact : {e}")?,
        }

        Ok(())
    }

    /// Rendu de la faute du dernier passage, s’il y en a une.
    pub fn rend_erreur(&self, out: &mut impl Write) -> io::Result<()> {
        match &self.erreur {
            Some(e) => writeln!(out, "Erreur : {e}"),
            None => Ok(()),
        }
    }
}
