//! Shared constants used across ArticleStyle crates.

/// Default settings panel width in logical pixels.
pub const DEFAULT_PANEL_WIDTH: f32 = 400.0;
/// Narrowest accepted panel width; smaller values are clamped.
pub const MIN_PANEL_WIDTH: f32 = 280.0;
/// Widest accepted panel width; larger values are clamped.
pub const MAX_PANEL_WIDTH: f32 = 640.0;

/// Tracing filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "articlestyle=warn,articlestyle_core=info,articlestyle_gui=info";

/// Environment variable naming a text file to show as the article.
pub const ENV_ARTICLE_PATH: &str = "ARTICLE_PATH";
/// Environment variable overriding the panel width.
pub const ENV_PANEL_WIDTH: &str = "PANEL_WIDTH";
/// Environment flag enabling per-input dismissal tracing.
pub const ENV_PANEL_INPUT_TRACE: &str = "PANEL_INPUT_TRACE";
/// Environment variable for the initial font family value.
pub const ENV_FONT_FAMILY: &str = "ARTICLE_FONT_FAMILY";
/// Environment variable for the initial font size value.
pub const ENV_FONT_SIZE: &str = "ARTICLE_FONT_SIZE";
/// Environment variable for the initial font color value.
pub const ENV_FONT_COLOR: &str = "ARTICLE_FONT_COLOR";
/// Environment variable for the initial background color value.
pub const ENV_BACKGROUND_COLOR: &str = "ARTICLE_BACKGROUND_COLOR";
/// Environment variable for the initial content width value.
pub const ENV_CONTENT_WIDTH: &str = "ARTICLE_CONTENT_WIDTH";
