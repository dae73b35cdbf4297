//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Contient l’entrée, le résultat arrondi, la lecture exacte, l’erreur, la démarche et le
//! mode d’arrondi. Aucune évaluation ici.

use calculatrice_plate::noyau::ModeArrondi;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub arbre: String,
    pub etapes: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // arrondi à 2 décimales
    pub exact: String,    // lecture rationnelle ("n/d" ou "indéfini")
    pub erreur: String,

    pub demarche: Demarche,

    // --- paramètres ---
    pub mode: ModeArrondi,

    // --- UX ---
    // Redonne le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            exact: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            mode: ModeArrondi::default(),
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /// AC : tout remettre à zéro, mode d’arrondi compris.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.mode = ModeArrondi::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur + démarche.
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.exact.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Erreur : on garde le dernier résultat affiché, mais la démarche n’est plus fiable.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_resultats(
        &mut self,
        resultat: impl Into<String>,
        exact: impl Into<String>,
        demarche: Demarche,
    ) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.exact = exact.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    pub fn set_mode(&mut self, mode: ModeArrondi) {
        self.mode = mode;
        self.focus_entree = true;
    }
}
