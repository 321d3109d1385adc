//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No channel to the network thread
    #[error("Network channel not set in state")]
    NetworkChannelNotSet,

    /// The network thread has gone away
    #[error("Failed to send network event: {0}")]
    NetworkSendFailed(String),

    /// Category id is not part of the catalog
    #[error("Unknown category: {id}")]
    UnknownCategory { id: String },
}
