//! Root crate facade for the ArticleStyle core and native GUI.

pub use articlestyle_core::{
    article, boundary, config, constants, error, listeners, options, panel, selection, AppError,
    Article, Config, PanelController, StyleSelection,
};

#[cfg(feature = "gui")]
pub use articlestyle_gui::{run, ArticleApp};

/// Default style selection as pretty-printed JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn defaults_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&StyleSelection::default())
}
