// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau.
///
/// Seule la lecture d’un opérande peut échouer : la division par zéro donne une valeur
/// (infini / NaN ou `Exact::Indefini`), pas une erreur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Opérande vide ou non décimal (ex: "1++2", "-5", "1..2").
    #[error("opérande invalide {texte:?} (position {position})")]
    OperandeInvalide { texte: String, position: usize },
}
