//! HTTP client error types.

use pixel_commerce::CommerceError;
use thiserror::Error;

/// Errors that can occur when talking to the storefront backend.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never reached the server.
    #[error("Request failed: {0}")]
    Request(String),

    /// The server answered with an error status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to parse the response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Json(e.to_string())
    }
}

/// Map transport errors onto the domain taxonomy.
///
/// Client-error statuses become validation errors carrying the
/// server-supplied message; everything else that failed in transit or on
/// the server is a network error.
impl From<FetchError> for CommerceError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Request(message) => CommerceError::Network(message),
            FetchError::Http { status, message } if (400..500).contains(&status) => {
                CommerceError::Validation(message)
            }
            FetchError::Http { status, message } => {
                CommerceError::Network(format!("HTTP {}: {}", status, message))
            }
            FetchError::Parse(message) | FetchError::Json(message) => {
                CommerceError::Decode(message)
            }
        }
    }
}
