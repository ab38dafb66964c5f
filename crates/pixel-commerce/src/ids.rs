//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a ProductId where a CartItemId is expected. Product and
//! cart-item identifiers are issued by the backend as integers and treated
//! as opaque here; the cart code is a client-generated string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs over backend-issued integers.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique backend-issued identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(i64);

        impl $name {
            /// Create an ID from its raw value.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the raw value.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(ProductId);
define_id!(CartItemId);

/// Length of generated cart codes.
const CART_CODE_LEN: usize = 11;

/// Opaque identifier correlating the shopper with a server-side cart.
///
/// Generated client-side on first use and persisted across sessions; the
/// backend accepts it verbatim on every cart endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartCode(String);

impl CartCode {
    /// Create a cart code from an existing string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generate a fresh random alphanumeric cart code.
    pub fn generate() -> Self {
        use rand::distributions::Alphanumeric;
        use rand::Rng;

        let code: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(CART_CODE_LEN)
            .map(char::from)
            .collect();
        Self(code)
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CartCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CartCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CartCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for CartCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
