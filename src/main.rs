use eframe::egui;
use flashdeck::gui::FlashdeckApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting Flashdeck v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 620.0])
            .with_min_inner_size([420.0, 420.0])
            .with_title("Flashdeck")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native("Flashdeck", options, Box::new(|cc| Ok(Box::new(FlashdeckApp::new(cc)))))
}
