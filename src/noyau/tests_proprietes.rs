//! Tests de propriétés : l’arbre à liens locaux contre un évaluateur de référence.
//!
//! La référence est un analyseur à montée de priorité classique (récursif), sans rapport
//! avec les passes gauche/droite. Mêmes opérations dans le même ordre : l’égalité des
//! flottants est donc stricte.

use proptest::prelude::*;

use super::arbre::Arbre;
use super::arrondi::arrondi_demi_haut_2;
use super::eval::{construire_arbre, trace, Exact, Valeur};
use super::jetons::{tokenize, Jeton, Operateur};
use super::{is_valid_equation, solve};

/* ------------------------ Référence : montée de priorité ------------------------ */

fn priorite(op: Operateur) -> u8 {
    if op.est_multiplicatif() {
        2
    } else {
        1
    }
}

fn monter<V: Valeur>(jetons: &[Jeton], pos: &mut usize, min: u8) -> V {
    let mut gauche = match &jetons[*pos] {
        Jeton::Nombre(n) => V::depuis_nombre(n),
        Jeton::Op(op) => panic!("opérande attendu, reçu {op}"),
    };
    *pos += 1;

    while let Some(Jeton::Op(op)) = jetons.get(*pos) {
        let p = priorite(*op);
        if p < min {
            break;
        }
        *pos += 1;
        let droite = monter(jetons, pos, p + 1);
        gauche = V::appliquer(*op, gauche, droite);
    }

    gauche
}

fn reference<V: Valeur>(equation: &str) -> V {
    let jetons = tokenize(equation).expect("équation générée invalide");
    let mut pos = 0;
    let v = monter(&jetons, &mut pos, 1);
    assert_eq!(pos, jetons.len(), "jetons non consommés");
    v
}

/* ------------------------ Générateurs ------------------------ */

// Opérande non nul : pas de division par zéro, donc pas de NaN dans les comparaisons.
fn operande_non_nul() -> impl Strategy<Value = String> {
    (1u32..1000, proptest::option::of(0u32..100)).prop_map(|(e, f)| match f {
        Some(f) => format!("{e}.{f:02}"),
        None => format!("{e}"),
    })
}

// Opérande quelconque, zéro compris.
fn operande() -> impl Strategy<Value = String> {
    prop_oneof![Just("0".to_string()), "[0-9]{1,3}", "[0-9]{1,2}\\.[0-9]{1,2}"]
}

fn operateur() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')]
}

fn equation_avec<S, F>(operande: F) -> impl Strategy<Value = String>
where
    S: Strategy<Value = String>,
    F: Fn() -> S,
{
    (
        operande(),
        proptest::collection::vec((operateur(), operande()), 0..12),
    )
        .prop_map(|(premier, suite)| {
            let mut s = premier;
            for (op, x) in suite {
                s.push(op);
                s.push_str(&x);
            }
            s
        })
}

fn nb_operateurs(s: &str) -> usize {
    s.chars().filter(|c| Operateur::depuis_char(*c).is_some()).count()
}

fn arbre(s: &str) -> Arbre {
    construire_arbre(s).expect("équation générée invalide")
}

proptest! {
    #[test]
    fn racine_egale_reference(s in equation_avec(operande_non_nul)) {
        let a = arbre(&s);
        let v: f64 = a.valeur_racine();
        prop_assert_eq!(v, reference::<f64>(&s), "équation {}", s);
    }

    #[test]
    fn exact_egal_reference(s in equation_avec(operande_non_nul)) {
        let a = arbre(&s);
        let v: Exact = a.valeur_racine();
        prop_assert_eq!(v, reference::<Exact>(&s), "équation {}", s);
    }

    #[test]
    fn solve_arrondit_la_reference(s in equation_avec(operande_non_nul)) {
        let attendu = arrondi_demi_haut_2(reference::<f64>(&s));
        prop_assert_eq!(solve(&s).unwrap(), attendu);
    }

    #[test]
    fn arbre_toujours_bien_forme(s in equation_avec(operande)) {
        let a = arbre(&s);
        prop_assert!(a.est_bien_forme(), "arbre mal formé pour {}", s);
        prop_assert_eq!(a.len(), 2 * nb_operateurs(&s) + 1);
    }

    #[test]
    fn zero_ne_fait_jamais_echouer(s in equation_avec(operande)) {
        prop_assert!(is_valid_equation(&s));
        prop_assert!(solve(&s).is_ok());
    }

    #[test]
    fn une_ligne_par_operateur(s in equation_avec(operande)) {
        let lignes: Vec<String> = trace(&s).unwrap().collect();
        prop_assert_eq!(lignes.len(), nb_operateurs(&s));

        // rangs croissants : aucun `*` `/` après le premier `+` `-`
        let rangs: Vec<u8> = lignes
            .iter()
            .map(|l| {
                let symbole = l.split(' ').nth(1).and_then(|t| t.chars().next());
                symbole.and_then(Operateur::depuis_char).map_or(0, Operateur::rang)
            })
            .collect();
        prop_assert!(rangs.iter().all(|&r| r == 1 || r == 2), "{:?}", lignes);
        prop_assert!(rangs.windows(2).all(|w| w[0] <= w[1]), "{:?}", lignes);
    }

    #[test]
    fn arrondi_idempotent(x in 0.0f64..1.0e9) {
        let une = arrondi_demi_haut_2(x);
        prop_assert_eq!(arrondi_demi_haut_2(une), une);
    }
}
