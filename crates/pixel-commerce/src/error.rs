//! Storefront error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Every cart mutation and catalog fetch resolves into one of these; the
/// reconciler converts them into user notifications at the operation boundary
/// rather than letting them escape.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// The service could not be reached, or answered with nothing usable.
    #[error("Network error: {0}")]
    Network(String),

    /// The service rejected the request payload.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Client-side guard: quantities below 1 are rejected before any request.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Item not present in the cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// A response arrived but its body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Currency mismatch between cart values.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Decode(e.to_string())
    }
}
