//! Generation service error types.

/// Errors that can occur while generating recipes.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Service answered with an error payload
    #[error("Generation service error: {0}")]
    ServiceError(String),

    /// Failed to deserialize the envelope or the generated recipes
    #[error("Failed to deserialize response: {0}")]
    Deserialization(#[from] serde_json::Error),
}
