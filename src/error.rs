//! Application-wide error types.
//!
//! Generation and state failures never reach this level: the adapter turns
//! them into empty results and the state controller logs them. What remains
//! are startup and terminal failures.

pub use crate::config::ConfigError;

/// Errors that end the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Terminal setup, drawing or restore failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal event channel failures
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),

    /// The network thread could not build its runtime
    #[error("Failed to create runtime: {0}")]
    RuntimeCreation(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
