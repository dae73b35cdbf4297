// src/noyau/arbre.rs
//
// Arbre d’évaluation implicite, sans pile ni descente récursive.
//
// Les jetons deviennent des noeuds dans un tableau (un noeud par jeton, même ordre).
// Chaque noeud opérateur reçoit deux références (indices) vers d’autres noeuds du
// même tableau, posées en deux passes :
// - passe gauche : `*` `/` reçoivent gauche + droite, `+` `-` reçoivent gauche
// - passe droite : `+` `-` reçoivent droite
//
// Grammaire supposée : Nombre (Op Nombre)* — garantie par `tokenize`.
// Les opérateurs sont donc toujours aux indices impairs.

use std::fmt;

use log::{debug, trace};

use super::jetons::{Jeton, Nombre, Operateur};

/// Référence vers un noeud du tableau propriétaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Indice(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct NoeudOp {
    pub op: Operateur,
    pub rang: u8,
    pub gauche: Option<Indice>,
    pub droite: Option<Indice>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Noeud {
    Feuille(Nombre),
    Op(NoeudOp),
}

/// Tableau de noeuds, seul propriétaire de l’arbre.
#[derive(Clone, Debug)]
pub struct Arbre {
    noeuds: Vec<Noeud>,
}

impl Arbre {
    /// Construit l’arbre à partir d’une suite alternée non vide (sortie de `tokenize`).
    pub(crate) fn construire(jetons: &[Jeton]) -> Arbre {
        let noeuds = jetons
            .iter()
            .map(|j| match j {
                Jeton::Nombre(n) => Noeud::Feuille(n.clone()),
                Jeton::Op(op) => Noeud::Op(NoeudOp {
                    op: *op,
                    rang: op.rang(),
                    gauche: None,
                    droite: None,
                }),
            })
            .collect();

        let mut arbre = Arbre { noeuds };
        arbre.lier_gauche();
        arbre.lier_droite();

        debug!(
            "arbre construit : {} noeuds, racine {:?}",
            arbre.len(),
            arbre.racine()
        );
        debug_assert!(arbre.est_bien_forme(), "arbre mal lié : {arbre:?}");
        arbre
    }

    pub fn len(&self) -> usize {
        self.noeuds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.noeuds.is_empty()
    }

    pub fn noeud(&self, i: Indice) -> Option<&Noeud> {
        self.noeuds.get(i.0)
    }

    pub fn noeuds(&self) -> &[Noeud] {
        &self.noeuds
    }

    /// Noeud qui porte la valeur de toute l’équation, le seul sans parent :
    /// - le dernier `+` `-` (chaque additif absorbe le précédent, et la chaîne
    ///   `*` `/` qui suit est déjà sa droite)
    /// - sinon le dernier opérateur, en n-2 (chaîne purement multiplicative)
    /// - sinon la feuille unique (nombre seul)
    pub fn racine(&self) -> Indice {
        let n = self.noeuds.len();
        if n <= 1 {
            return Indice(0);
        }
        let i = (0..n)
            .rev()
            .find(|&i| self.est_additif_en(i))
            .unwrap_or(n - 2);
        Indice(i)
    }

    fn op_en(&self, i: usize) -> Option<Operateur> {
        match self.noeuds.get(i) {
            Some(Noeud::Op(n)) => Some(n.op),
            _ => None,
        }
    }

    fn est_multiplicatif_en(&self, i: usize) -> bool {
        self.op_en(i).is_some_and(Operateur::est_multiplicatif)
    }

    fn est_additif_en(&self, i: usize) -> bool {
        self.op_en(i).is_some_and(|op| !op.est_multiplicatif())
    }

    fn poser(&mut self, i: usize, gauche: Option<usize>, droite: Option<usize>) {
        if let Some(Noeud::Op(n)) = self.noeuds.get_mut(i) {
            if let Some(g) = gauche {
                trace!("{i} ({}) gauche -> {g}", n.op);
                n.gauche = Some(Indice(g));
            }
            if let Some(d) = droite {
                trace!("{i} ({}) droite -> {d}", n.op);
                n.droite = Some(Indice(d));
            }
        }
    }

    /// Passe gauche.
    ///
    /// - `*` `/` : gauche = i-2 si c’est déjà un `*` `/` (la chaîne se replie de gauche
    ///   à droite), sinon i-1 ; droite = i+1, toujours.
    /// - `+` `-` : gauche = le `+` `-` le plus proche en arrière (il porte tout ce qui
    ///   précède), sinon i-2 (fin de la chaîne multiplicative de tête, ou le premier
    ///   nombre), sinon i-1.
    fn lier_gauche(&mut self) {
        for i in 0..self.noeuds.len() {
            let Some(op) = self.op_en(i) else {
                continue;
            };

            if op.est_multiplicatif() {
                let gauche = match i.checked_sub(2) {
                    Some(j) if self.est_multiplicatif_en(j) => j,
                    _ => i - 1,
                };
                self.poser(i, Some(gauche), Some(i + 1));
            } else {
                let gauche = match i.checked_sub(2) {
                    None => i - 1,
                    Some(debut) => (0..=debut)
                        .rev()
                        .step_by(2)
                        .find(|&j| self.est_additif_en(j))
                        .unwrap_or(debut),
                };
                // droite : attend la passe droite
                self.poser(i, Some(gauche), None);
            }
        }
    }

    /// Passe droite : `+` `-` prennent pour droite le dernier noeud de la chaîne
    /// `*` `/` qui les suit, ou simplement i+1 s’il n’y en a pas.
    fn lier_droite(&mut self) {
        let n = self.noeuds.len();

        for i in 0..n {
            if !self.est_additif_en(i) {
                continue;
            }

            let droite = if i + 2 < n && self.est_multiplicatif_en(i + 2) {
                let mut j = i + 2;
                while j < n && self.est_multiplicatif_en(j) {
                    j += 2;
                }
                j - 2
            } else {
                i + 1
            };
            self.poser(i, None, Some(droite));
        }
    }

    /// Vérifie les invariants de structure :
    /// - longueur impaire, feuilles aux indices pairs, opérateurs aux indices impairs
    /// - chaque opérateur a ses deux références, dans le tableau, jamais sur lui-même
    /// - chaque noeud a exactement un parent, sauf la racine qui n’en a aucun
    /// - depuis la racine, on atteint tous les noeuds une seule fois (pas de cycle)
    pub fn est_bien_forme(&self) -> bool {
        let n = self.noeuds.len();
        if n % 2 == 0 {
            return false;
        }

        let mut parents = vec![0usize; n];
        for (i, noeud) in self.noeuds.iter().enumerate() {
            match noeud {
                Noeud::Feuille(_) if i % 2 == 0 => {}
                Noeud::Op(op) if i % 2 == 1 => {
                    let (Some(g), Some(d)) = (op.gauche, op.droite) else {
                        return false;
                    };
                    for enfant in [g.0, d.0] {
                        if enfant >= n || enfant == i {
                            return false;
                        }
                        parents[enfant] += 1;
                    }
                }
                _ => return false,
            }
        }

        let racine = self.racine().0;
        let orphelins_ok = parents
            .iter()
            .enumerate()
            .all(|(i, &p)| if i == racine { p == 0 } else { p == 1 });
        if !orphelins_ok {
            return false;
        }

        let mut vus = vec![false; n];
        let mut pile = vec![racine];
        let mut visites = 0;
        while let Some(i) = pile.pop() {
            if vus[i] {
                return false;
            }
            vus[i] = true;
            visites += 1;

            if let Noeud::Op(op) = &self.noeuds[i] {
                pile.extend(op.gauche.map(|g| g.0));
                pile.extend(op.droite.map(|d| d.0));
            }
        }

        visites == n
    }

    fn fmt_noeud(&self, f: &mut fmt::Formatter, i: Indice) -> fmt::Result {
        match self.noeud(i) {
            Some(Noeud::Feuille(n)) => write!(f, "{}", n.texte),
            Some(Noeud::Op(op)) => {
                write!(f, "(")?;
                self.fmt_lien(f, op.gauche)?;
                write!(f, "{}", op.op)?;
                self.fmt_lien(f, op.droite)?;
                write!(f, ")")
            }
            None => write!(f, "?"),
        }
    }

    fn fmt_lien(&self, f: &mut fmt::Formatter, lien: Option<Indice>) -> fmt::Result {
        match lien {
            Some(i) => self.fmt_noeud(f, i),
            None => write!(f, "?"),
        }
    }
}

/// Forme parenthésée, depuis la racine : "2+3*4" -> "(2+(3*4))".
impl fmt::Display for Arbre {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.noeuds.is_empty() {
            return Ok(());
        }
        self.fmt_noeud(f, self.racine())
    }
}
