// src/noyau/arrondi.rs
//
// Arrondi final à 2 décimales.
//
// Formule compatible : x*100 + 0.5, tronqué vers zéro, /100.
// Demi vers le haut pour x ≥ 0. Pour x < 0 la troncature remonte vers +∞
// (ex: -1 -> -0.99, -1.125 -> -1.12) : comportement conservé tel quel en mode
// Compatible, corrigé en mode Symetrique.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeArrondi {
    /// Formule exacte (x*100 + 0.5, troncature, /100).
    #[default]
    Compatible,
    /// Demi s’éloignant de zéro, des deux côtés.
    Symetrique,
}

/// x*100 + 0.5, tronqué vers zéro, /100. inf et NaN traversent sans erreur.
pub fn arrondi_demi_haut_2(x: f64) -> f64 {
    (x * 100.0 + 0.5).trunc() / 100.0
}

fn arrondi_symetrique_2(x: f64) -> f64 {
    arrondi_demi_haut_2(x.abs()).copysign(x)
}

pub fn arrondi(x: f64, mode: ModeArrondi) -> f64 {
    match mode {
        ModeArrondi::Compatible => arrondi_demi_haut_2(x),
        ModeArrondi::Symetrique => arrondi_symetrique_2(x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demi_vers_le_haut() {
        assert_eq!(arrondi_demi_haut_2(1.125), 1.13);
        assert_eq!(arrondi_demi_haut_2(0.375), 0.38);
        assert_eq!(arrondi_demi_haut_2(2.344), 2.34);
        assert_eq!(arrondi_demi_haut_2(14.0), 14.0);
    }

    #[test]
    fn representation_flottante_de_1_005() {
        // 1.005 vaut en réalité 1.00499999999999989… en f64
        assert_eq!(arrondi_demi_haut_2(1.005), 1.0);
    }

    #[test]
    fn negatifs_formule_compatible() {
        assert_eq!(arrondi_demi_haut_2(-1.125), -1.12);
        assert_eq!(arrondi_demi_haut_2(-1.0), -0.99);
        assert_eq!(arrondi_demi_haut_2(-0.004), 0.0);
    }

    #[test]
    fn negatifs_symetrique() {
        assert_eq!(arrondi(-1.125, ModeArrondi::Symetrique), -1.13);
        assert_eq!(arrondi(-1.0, ModeArrondi::Symetrique), -1.0);
        assert_eq!(arrondi(2.344, ModeArrondi::Symetrique), 2.34);
    }

    #[test]
    fn valeurs_non_finies() {
        assert_eq!(arrondi_demi_haut_2(f64::INFINITY), f64::INFINITY);
        assert_eq!(arrondi_demi_haut_2(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(arrondi_demi_haut_2(f64::NAN).is_nan());
        assert!(arrondi(f64::NAN, ModeArrondi::Symetrique).is_nan());
    }

    #[test]
    fn idempotent_sur_positifs() {
        for x in [0.0, 0.1 + 0.2, 1.125, 3.14159, 99.995, 12345.678] {
            let une = arrondi_demi_haut_2(x);
            assert_eq!(arrondi_demi_haut_2(une), une, "x={x}");
        }
    }

    #[test]
    fn mode_par_defaut_compatible() {
        assert_eq!(ModeArrondi::default(), ModeArrondi::Compatible);
    }
}
