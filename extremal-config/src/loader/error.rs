//! Errors raised while resolving configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by [`crate::ConfigLoader`].
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// An explicitly named config file does not exist.
    #[error("config file {path} does not exist")]
    MissingConfig {
        /// The missing path.
        path: PathBuf,
    },
    /// A config file or inline JSON failed to read or parse.
    #[error("failed to load scanner configuration: {0}")]
    Scanner(#[source] anyhow::Error),
    /// A per-field override could not be parsed.
    #[error("invalid value '{value}' for {var}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// Raw value as found.
        value: String,
    },
    /// `chunk_size` resolved to zero.
    #[error("chunk_size must be at least 1")]
    InvalidChunkSize,
    /// The `.env` file exists but could not be parsed.
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
