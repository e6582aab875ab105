//! UI surfaces drawn each frame by the app shell.

/// Central article view.
pub(super) mod article_view;
/// Right-side settings panel.
pub(super) mod params_panel;
/// Floating open/close arrow.
pub(super) mod toggle;
