//! Configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// Error returned when a styling configuration cannot be loaded or is invalid.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension does not name a supported format.
    #[error(
        "unsupported configuration format for '{}' (expected .json, .yaml or .yml)",
        path.display()
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("unsupported darkMode value '{value}'")]
    UnsupportedDarkMode { value: String },

    /// The configuration parsed but breaks a structural rule.
    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            message: message.into(),
        }
    }
}
