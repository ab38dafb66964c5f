//! Session error types.

use thiserror::Error;

/// Errors that can occur in session storage and token handling.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Failed to open client storage.
    #[error("Failed to open client storage: {0}")]
    Open(String),

    /// Failed to perform a storage operation.
    #[error("Storage operation failed: {0}")]
    Store(String),

    /// Failed to serialize or deserialize a stored value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The access token could not be decoded.
    #[error("Invalid access token: {0}")]
    InvalidToken(String),
}
