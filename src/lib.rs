//! Calculatrice plate — noyau réutilisable.
//!
//! Évalue des équations sans parenthèses (`+ - * /` sur des décimaux) en construisant
//! un arbre par simple inspection des voisins dans un tableau indexé.

pub mod noyau;

pub use noyau::{is_valid_equation, resoudre, solve, trace};
