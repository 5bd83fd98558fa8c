// src/noyau/suite.rs
//
// Suite ordonnée de jetons : ajout en fin seulement, ordre d’insertion conservé.
// Un Vec suffit (ajout O(1) amorti) ; aucun consommateur n’a besoin de retrait.

use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuiteJetons {
    jetons: Vec<String>,
}

impl SuiteJetons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, jeton: impl Into<String>) {
        self.jetons.push(jeton.into());
    }

    /// Copie indexable, indépendante des ajouts ultérieurs.
    pub fn materialise(&self) -> Vec<String> {
        self.jetons.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.jetons.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.jetons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jetons.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SuiteJetons {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut suite = Self::new();
        for jeton in iter {
            suite.push(jeton);
        }
        suite
    }
}

/// Jetons séparés par une espace (format d’affichage).
impl fmt::Display for SuiteJetons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut premier = true;
        for jeton in self.iter() {
            if !premier {
                f.write_str(" ")?;
            }
            f.write_str(jeton)?;
            premier = false;
        }
        Ok(())
    }
}
