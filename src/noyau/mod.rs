//! Noyau — calculatrice plate
//!
//! Organisation interne :
//! - validation.rs : filtre d’entrée (caractères admis, dernier caractère)
//! - jetons.rs     : tokenisation (Nombre / Op alternés)
//! - arbre.rs      : tableau de noeuds + passes gauche/droite + racine
//! - eval.rs       : valeur (flottante ou exacte) + pipeline complet
//! - demarche.rs   : une ligne par opérateur, `*` `/` d’abord
//! - arrondi.rs    : 2 décimales (formule compatible ou symétrique)
//! - erreur.rs     : erreur d’opérande

pub mod arbre;
pub mod arrondi;
pub mod demarche;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod validation;

#[cfg(test)]
mod tests_proprietes;

// API publique
pub use arrondi::ModeArrondi;
pub use demarche::Demarche;
pub use erreur::ErreurCalcul;
pub use eval::{construire_arbre, resoudre, solve, trace, Exact, Resolution};
pub use validation::is_valid_equation;
