// main.rs - Desktop viewer for Conway's Game of Life

use eframe::egui;
use tracing::info;

mod ui;
mod viewer;

use viewer::Viewer;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grid_display=info".into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0]),
        ..Default::default()
    };

    info!("Starting grid viewer");
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(Viewer::default())),
    )
}
