//! Application error types for configuration and article loading.
use thiserror::Error;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown {field} option: {value:?}")]
    UnknownOption { field: &'static str, value: String },

    #[error("Article has no text: {0}")]
    EmptyArticle(String),
}
