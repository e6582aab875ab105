//! Native egui front end for ArticleStyle.
//!
//! Exposes a `run` helper so the workspace root can launch the UI without
//! duplicating initialization logic, plus [`ArticleApp`] for headless frames.

mod app;

pub use app::{ArticleApp, ArticleView};

use articlestyle_core::constants::DEFAULT_LOG_FILTER;
use articlestyle_core::Config;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed by the embedding binary.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// Start the native UI with tracing enabled.
///
/// # Returns
/// The result of `eframe::run_native`.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error, including app
/// creation failures when a configured article file cannot be loaded.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let config = Config::from_env();
    let article = config
        .load_article()
        .map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;
    info!(
        panel_width = config.panel_width,
        selection = %config.initial_selection,
        "starting ArticleStyle"
    );
    let app = ArticleApp::new(&config, article);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("ArticleStyle"),
        ..Default::default()
    };

    eframe::run_native("ArticleStyle", options, Box::new(|_cc| Ok(Box::new(app))))
}
