//! Configuration-specific error types.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to find home directory
    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    /// Failed to load configuration file
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to deserialize configuration
    #[error("Failed to deserialize configuration: {0}")]
    DeserializationFailed(String),

    /// No API key in the environment or the configuration file
    #[error("API key not set: export GEMINI_API_KEY (or API_KEY) or add api_key to {0}")]
    ApiKeyNotSet(String),

    /// A configured value is out of range
    #[error("Invalid configuration value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
