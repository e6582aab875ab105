//! Configuration loading from environment variables.

use crate::article::Article;
use crate::constants::{
    DEFAULT_PANEL_WIDTH, ENV_ARTICLE_PATH, ENV_BACKGROUND_COLOR, ENV_CONTENT_WIDTH,
    ENV_FONT_COLOR, ENV_FONT_FAMILY, ENV_FONT_SIZE, ENV_PANEL_INPUT_TRACE, ENV_PANEL_WIDTH,
    MAX_PANEL_WIDTH, MIN_PANEL_WIDTH,
};
use crate::error::AppError;
use crate::options::FieldValue;
use crate::selection::StyleSelection;
use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Runtime configuration for ArticleStyle.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub article_path: Option<PathBuf>,
    pub panel_width: f32,
    /// Selection the article starts with; the panel draft is seeded from it.
    pub initial_selection: StyleSelection,
    pub input_trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            article_path: None,
            panel_width: DEFAULT_PANEL_WIDTH,
            initial_selection: StyleSelection::default(),
            input_trace: false,
        }
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn resolve_home_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        if !home.trim().is_empty() {
            return Some(PathBuf::from(home));
        }
    }

    // Windows USERPROFILE
    if let Ok(profile) = env::var("USERPROFILE") {
        if !profile.trim().is_empty() {
            return Some(PathBuf::from(profile));
        }
    }

    None
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_panel_width(raw: &str) -> Option<f32> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|width| width.is_finite())
        .map(|width| width.clamp(MIN_PANEL_WIDTH, MAX_PANEL_WIDTH))
}

fn field_or_default<T, F>(lookup: &F, name: &str) -> T
where
    T: FieldValue,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return T::default();
    };
    match T::parse(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("{} from {}; keeping default {}", err, name, T::default().value());
            T::default()
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing
    /// or malformed.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup`: Returns the raw value for a variable name, if set.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let panel_width = match lookup(ENV_PANEL_WIDTH) {
            None => DEFAULT_PANEL_WIDTH,
            Some(raw) => parse_panel_width(&raw).unwrap_or_else(|| {
                warn!("Ignoring invalid {}={:?}", ENV_PANEL_WIDTH, raw);
                DEFAULT_PANEL_WIDTH
            }),
        };

        Self {
            article_path: lookup(ENV_ARTICLE_PATH)
                .filter(|path| !path.trim().is_empty())
                .map(|path| expand_tilde(path.trim())),
            panel_width,
            initial_selection: StyleSelection {
                font_family: field_or_default(&lookup, ENV_FONT_FAMILY),
                font_size: field_or_default(&lookup, ENV_FONT_SIZE),
                font_color: field_or_default(&lookup, ENV_FONT_COLOR),
                background_color: field_or_default(&lookup, ENV_BACKGROUND_COLOR),
                content_width: field_or_default(&lookup, ENV_CONTENT_WIDTH),
            },
            input_trace: lookup(ENV_PANEL_INPUT_TRACE)
                .and_then(|value| parse_env_flag(&value))
                .unwrap_or(false),
        }
    }

    /// Load the configured article, or the built-in sample when none is set.
    ///
    /// # Errors
    /// Propagates [`Article::load`] failures for a configured path.
    pub fn load_article(&self) -> Result<Article, AppError> {
        match &self.article_path {
            Some(path) => Article::load(path),
            None => Ok(Article::sample()),
        }
    }
}
