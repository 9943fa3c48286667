mod app;
mod ui;

use app::UnlearnApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    tracing::info!("starting unlearning visualizer");

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Unlearning Visualizer",
        native_options,
        Box::new(|_cc| Ok(Box::new(UnlearnApp::default()))),
    )
}
