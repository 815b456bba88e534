// src/errors.rs

//! Crate-wide error type for loading configuration and version definitions.
//!
//! The three validation variants carry the exact wording callers render to
//! users; tests compare them as literal strings.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Structural problem in the configuration file.
    #[error("Given config file is invalid: {0}")]
    InvalidConfiguration(String),

    /// `__config_version__` is present but not one this loader understands.
    #[error("Unsupported configuration file version {0}")]
    UnsupportedSchemaVersion(String),

    /// Structural problem or missing data in the version-state file.
    #[error("Given version file is invalid: {0}")]
    InvalidVersionFile(String),

    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ConfigError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        ConfigError::InvalidConfiguration(reason.into())
    }

    pub(crate) fn invalid_version_file(reason: impl Into<String>) -> Self {
        ConfigError::InvalidVersionFile(reason.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
