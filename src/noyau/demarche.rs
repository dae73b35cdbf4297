// src/noyau/demarche.rs
//
// Démarche : une ligne "gauche op droite = résultat" par opérateur,
// rang 1 (`*` `/`) d’abord, puis rang 2 (`+` `-`), et par indice croissant dans un rang.
//
// Purement informative : le résultat officiel reste la valeur de la racine,
// jamais relu depuis ce texte.

use std::iter::FusedIterator;

use super::arbre::{Arbre, Indice, Noeud, NoeudOp};

const RANG_MAX: u8 = 2;

/// Itérateur paresseux et fini sur les lignes de démarche. Il possède son arbre :
/// une fois épuisé, il ne redémarre pas.
#[derive(Clone, Debug)]
pub struct Demarche {
    arbre: Arbre,
    rang: u8,
    pos: usize,
}

impl Demarche {
    pub fn new(arbre: Arbre) -> Self {
        Self {
            arbre,
            rang: 1,
            pos: 0,
        }
    }

    fn ligne(arbre: &Arbre, i: Indice, op: &NoeudOp) -> String {
        let lire = |lien: Option<Indice>| lien.map_or(f64::NAN, |j| arbre.valeur::<f64>(j));
        let g = lire(op.gauche);
        let d = lire(op.droite);
        let r: f64 = arbre.valeur(i);
        format!("{g} {} {d} = {r}", op.op)
    }
}

impl Iterator for Demarche {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.rang <= RANG_MAX {
            while self.pos < self.arbre.len() {
                let i = Indice(self.pos);
                self.pos += 1;

                if let Some(Noeud::Op(op)) = self.arbre.noeud(i) {
                    if op.rang == self.rang {
                        return Some(Self::ligne(&self.arbre, i, op));
                    }
                }
            }
            self.rang += 1;
            self.pos = 0;
        }
        None
    }
}

impl FusedIterator for Demarche {}

#[cfg(test)]
mod tests {
    use crate::noyau::eval::trace;
    use pretty_assertions::assert_eq;

    fn lignes(s: &str) -> Vec<String> {
        trace(s)
            .unwrap_or_else(|e| panic!("trace({s:?}) erreur: {e}"))
            .collect()
    }

    #[test]
    fn rang_1_avant_rang_2() {
        assert_eq!(
            lignes("1+2*3-8/4"),
            vec!["2 * 3 = 6", "8 / 4 = 2", "1 + 6 = 7", "7 - 2 = 5"]
        );
    }

    #[test]
    fn meme_rang_jamais_ecrase() {
        // chaque opérateur garde sa ligne, même à rang égal
        assert_eq!(
            lignes("1+2+3+4"),
            vec!["1 + 2 = 3", "3 + 3 = 6", "6 + 4 = 10"]
        );
        assert_eq!(lignes("8/2*4"), vec!["8 / 2 = 4", "4 * 4 = 16"]);
    }

    #[test]
    fn nombre_seul_sans_ligne() {
        assert!(lignes("42").is_empty());
    }

    #[test]
    fn division_par_zero_dans_la_demarche() {
        assert_eq!(lignes("5/0"), vec!["5 / 0 = inf"]);
        assert_eq!(lignes("0/0"), vec!["0 / 0 = NaN"]);
    }

    #[test]
    fn epuisee_reste_vide() {
        let mut d = trace("1+2").unwrap();
        assert_eq!(d.next().as_deref(), Some("1 + 2 = 3"));
        assert_eq!(d.next(), None);
        assert_eq!(d.next(), None);
    }

    #[test]
    fn decimaux() {
        assert_eq!(lignes("2.5*4"), vec!["2.5 * 4 = 10"]);
    }
}
