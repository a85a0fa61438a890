//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading the migrator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON content.
    #[error("Failed to parse JSON config '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse TOML config '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Missing required file.
    #[error("Missing required file: {path}")]
    MissingFile { path: String },
}
