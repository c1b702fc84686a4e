//! Error types for retroedit

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for retroedit operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Editor error types
///
/// Only loading (pattern tables, configuration, files) can fail. Keystroke
/// handling and per-line highlighting never return errors.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid pattern `{name}` in {language} table: {source}")]
    Pattern {
        language: String,
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("{language} defines {count} multiline patterns, at most 32 fit in a block state")]
    TooManyMultiline { language: String, count: usize },

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Message(String),
}
