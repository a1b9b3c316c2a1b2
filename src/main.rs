mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use app::PhasorscopeApp;
use eframe::egui;
use phasorscope::config::AnalysisConfig;

/// Env var naming an optional JSON [`AnalysisConfig`] file.
const CONFIG_ENV: &str = "PHASORSCOPE_CONFIG";

fn load_config() -> AnalysisConfig {
    let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) else {
        return AnalysisConfig::default();
    };
    match AnalysisConfig::load(&path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("Ignoring config {}: {e}", path.display());
            AnalysisConfig::default()
        }
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let config = load_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Phasorscope – Spectrum Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(PhasorscopeApp::new(config)))),
    )
}
