// src/main.rs
//
// Calculatrice plate — point d’entrée natif
// -----------------------------------------
// - eframe::run_native + NativeOptions
// - journal : env_logger (RUST_LOG=debug pour suivre jetons / arbre / résultat)
//
// Le calcul vit dans la bibliothèque (`calculatrice_plate::noyau`) ; ici, seulement l’UI.

use eframe::egui;

mod app;

use app::AppCalc;

/// Titre de la fenêtre.
const TITRE_APP: &str = "Calculatrice plate";

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([460.0, 680.0])
            .with_min_inner_size([380.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}
