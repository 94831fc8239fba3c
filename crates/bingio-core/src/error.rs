//! Error types for the Bingio application.

use thiserror::Error;

/// A shared error type for the entire Bingio application.
///
/// The detector, policy, and catalog are total functions and never fail;
/// errors only occur at the session boundary, when an assistant message can
/// no longer be delivered to the front end.
#[derive(Error, Debug, Clone)]
pub enum BingioError {
    /// The session's outbound channel is gone (front end shut down).
    #[error("session closed: {0}")]
    SessionClosed(String),

    /// Internal error (should not happen in normal operation)
    #[error("internal error: {0}")]
    Internal(String),
}

impl BingioError {
    /// Creates a SessionClosed error
    pub fn session_closed(message: impl Into<String>) -> Self {
        Self::SessionClosed(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// A type alias for `Result<T, BingioError>`.
pub type Result<T> = std::result::Result<T, BingioError>;
