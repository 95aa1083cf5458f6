//! Configuration errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("Unsupported config format: {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Empty command at position {index} of safe zone '{zone}'")]
    EmptyCommand { zone: String, index: usize },

    #[error("Invalid world size: {0}")]
    InvalidWorldSize(f32),
}

impl ConfigError {
    /// Whether keeping the previously loaded table is a sensible fallback.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ConfigError::Io { .. })
    }
}
