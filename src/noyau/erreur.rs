// src/noyau/erreur.rs
//
// Fautes du noyau. Aucune n’est rattrapée ici : elles remontent telles quelles
// jusqu’à l’appelant (main affiche le message et sort en erreur).

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    /// Un opérateur a trouvé moins de deux valeurs sur la pile.
    #[error("pile vide : l’opérateur '{jeton}' (position {position}) manque d’opérandes")]
    PileVide { jeton: String, position: usize },

    /// Jeton ni numérique ni opérateur connu (ex: une lettre à l’évaluation).
    #[error("opérande non numérique '{jeton}' (position {position})")]
    OperandeNonNumerique { jeton: String, position: usize },

    /// La pile ne se réduit pas à une seule valeur en fin de parcours.
    #[error("expression incomplète : {restants} valeurs restent sur la pile")]
    OperandesEnTrop { restants: usize },

    #[error("entrée vide")]
    EntreeVide,

    /// Mode exact seulement (le mode f64 suit IEEE : inf / NaN).
    #[error("division par zéro")]
    DivisionParZero,

    /// Mode exact seulement : `^` exige un exposant entier.
    #[error("exposant non entier")]
    ExposantNonEntier,

    /// Mode exact seulement : la puissance dépasserait `MAX_BITS_PUISSANCE`.
    #[error("exposant trop grand pour le calcul exact")]
    ExposantTropGrand,
}
