//! Core domain library for ArticleStyle (style options, panel state, config).

/// Article text model rendered behind the settings panel.
pub mod article;
/// Point-containment capability used for outside-click detection.
pub mod boundary;
/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across ArticleStyle crates.
pub mod constants;
/// Application error types.
pub mod error;
/// Scoped registration of global dismissal listeners.
pub mod listeners;
/// Option catalogs for each style field.
pub mod options;
/// Settings panel controller (open/close state machine plus draft).
pub mod panel;
/// Five-field style selection record.
pub mod selection;

pub use article::Article;
pub use boundary::ContainsPoint;
pub use config::Config;
pub use error::AppError;
pub use listeners::{DismissListeners, ListenerKind, ListenerRegistry};
pub use options::{
    BackgroundColor, ContentWidth, FieldValue, FontColor, FontFamily, FontSize, StyleField,
    StyleOption,
};
pub use panel::{PanelController, PanelState, StyleConsumer, Transition};
pub use selection::StyleSelection;
