//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> Arbre (passe gauche, passe droite) -> racine -> valeur -> arrondi
//!                                                        \-> démarche
//!
//! La valeur se calcule en relisant les références de l’arbre à chaque appel (pas de
//! cache). Le même arbre s’évalue en flottant (résultat) ou en rationnel (EXACT).

use std::fmt;

use log::debug;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::arbre::{Arbre, Indice, Noeud};
use super::arrondi::{arrondi, arrondi_demi_haut_2, ModeArrondi};
use super::demarche::Demarche;
use super::erreur::ErreurCalcul;
use super::jetons::{format_jetons, tokenize, Nombre, Operateur};

/// Domaine de calcul d’un arbre.
pub trait Valeur: Sized {
    fn depuis_nombre(n: &Nombre) -> Self;

    fn appliquer(op: Operateur, a: Self, b: Self) -> Self;

    /// Valeur d’un lien absent (arbre incomplet).
    fn indefini() -> Self;
}

/// Flottant IEEE-754 : la division par zéro donne ±inf ou NaN, jamais une erreur.
impl Valeur for f64 {
    fn depuis_nombre(n: &Nombre) -> Self {
        n.flottant
    }

    fn appliquer(op: Operateur, a: Self, b: Self) -> Self {
        match op {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => a / b,
        }
    }

    fn indefini() -> Self {
        f64::NAN
    }
}

/// Lecture exacte (rationnels).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Exact {
    Rat(BigRational),
    Indefini, // division par zéro exacte
}

impl Valeur for Exact {
    fn depuis_nombre(n: &Nombre) -> Self {
        Exact::Rat(n.exact.clone())
    }

    fn appliquer(op: Operateur, a: Self, b: Self) -> Self {
        let (Exact::Rat(x), Exact::Rat(y)) = (a, b) else {
            return Exact::Indefini;
        };
        match op {
            Operateur::Plus => Exact::Rat(x + y),
            Operateur::Moins => Exact::Rat(x - y),
            Operateur::Fois => Exact::Rat(x * y),
            Operateur::Divise if y.is_zero() => Exact::Indefini,
            Operateur::Divise => Exact::Rat(x / y),
        }
    }

    fn indefini() -> Self {
        Exact::Indefini
    }
}

impl fmt::Display for Exact {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Exact::Indefini => write!(f, "indéfini"),
            Exact::Rat(r) if r.denom().is_one() => write!(f, "{}", r.numer()),
            Exact::Rat(r) => write!(f, "{}/{}", r.numer(), r.denom()),
        }
    }
}

impl Arbre {
    /// Valeur du noeud `i` : feuille -> son nombre ; opérateur -> combine
    /// récursivement ses deux références.
    pub fn valeur<V: Valeur>(&self, i: Indice) -> V {
        match self.noeud(i) {
            Some(Noeud::Feuille(n)) => V::depuis_nombre(n),
            Some(Noeud::Op(op)) => {
                let (Some(g), Some(d)) = (op.gauche, op.droite) else {
                    return V::indefini();
                };
                V::appliquer(op.op, self.valeur(g), self.valeur(d))
            }
            None => V::indefini(),
        }
    }

    /// Valeur de toute l’équation.
    pub fn valeur_racine<V: Valeur>(&self) -> V {
        self.valeur(self.racine())
    }
}

/// tokenize + construction de l’arbre (les deux passes).
pub fn construire_arbre(equation: &str) -> Result<Arbre, ErreurCalcul> {
    let jetons = tokenize(equation)?;
    debug!("{} jetons pour {equation:?}", jetons.len());
    Ok(Arbre::construire(&jetons))
}

/// Résout l’équation et arrondit à 2 décimales (formule compatible).
///
/// N’appelle pas `is_valid_equation` : c’est à l’appelant de filtrer l’entrée.
pub fn solve(equation: &str) -> Result<f64, ErreurCalcul> {
    let arbre = construire_arbre(equation)?;
    let brut: f64 = arbre.valeur_racine();
    let resultat = arrondi_demi_haut_2(brut);
    debug!("{equation:?} = {brut} -> {resultat}");
    Ok(resultat)
}

/// Démarche seule : une ligne par opérateur, `*` `/` d’abord.
pub fn trace(equation: &str) -> Result<Demarche, ErreurCalcul> {
    Ok(Demarche::new(construire_arbre(equation)?))
}

/// Résultat complet d’une résolution (pour l’affichage).
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    /// Valeur arrondie (2 décimales).
    pub resultat: f64,
    /// Valeur de la racine, avant arrondi.
    pub brut: f64,
    pub exact: Exact,
    pub jetons: String,
    /// Forme parenthésée de l’arbre.
    pub arbre: String,
    pub etapes: Vec<String>,
}

/// Pipeline complet : jetons, arbre, valeur flottante + exacte, arrondi, démarche.
pub fn resoudre(equation: &str, mode: ModeArrondi) -> Result<Resolution, ErreurCalcul> {
    let jetons = tokenize(equation)?;
    let arbre = Arbre::construire(&jetons);

    let brut: f64 = arbre.valeur_racine();
    let exact: Exact = arbre.valeur_racine();
    let forme = arbre.to_string();

    Ok(Resolution {
        resultat: arrondi(brut, mode),
        brut,
        exact,
        jetons: format_jetons(&jetons),
        arbre: forme,
        etapes: Demarche::new(arbre).collect(),
    })
}
