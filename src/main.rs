mod demo;

use color_eyre::{eyre::eyre, Result};
use eframe::egui;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::demo::DemoApp;
use touch_controls::config::DemoConfig;

fn main() -> Result<()> {
    setup()?;

    let config_path = DemoConfig::default_path();
    info!("Loading config from {}", config_path.display());
    let config = DemoConfig::load(&config_path)
        .map_err(|e| eyre!("Failed to load config {}: {}", config_path.display(), e))?;

    info!("Starting touch controls demo");
    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = egui::ViewportBuilder::default()
        .with_inner_size([720.0, 420.0])
        .with_title("Touch Controls");

    eframe::run_native(
        "touch-controls-demo",
        native_options,
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc, config)))),
    )
    .map_err(|e| eyre!("UI terminated with error: {}", e))?;

    Ok(())
}

fn setup() -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    setup_logging_env();
    Ok(())
}

fn setup_logging_env() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();
}
