//! Access token handling.

use crate::{ClientStore, SessionError};
use serde::Deserialize;

/// Storage key for the access token.
const ACCESS_TOKEN_KEY: &str = "access";

/// JWT claims the client reads.
#[derive(Debug, Deserialize)]
struct Claims {
    exp: i64,
}

/// A bearer access token with its decoded expiry.
///
/// Only the `exp` claim is decoded; signature verification is the backend's
/// job. An expired token is simply not attached to outgoing requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    raw: String,
    expires_at: i64,
}

impl AccessToken {
    /// Parse a JWT, decoding the expiry from its payload segment.
    pub fn parse(raw: impl Into<String>) -> Result<Self, SessionError> {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

        let raw = raw.into();
        let mut segments = raw.split('.');
        let payload = match (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) {
            (Some(_), Some(payload), Some(_), None) => payload,
            _ => {
                return Err(SessionError::InvalidToken(
                    "expected three dot-separated segments".to_string(),
                ))
            }
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| SessionError::InvalidToken(e.to_string()))?;
        let claims: Claims = serde_json::from_slice(&bytes)
            .map_err(|e| SessionError::InvalidToken(e.to_string()))?;

        Ok(Self {
            raw,
            expires_at: claims.exp,
        })
    }

    /// The raw token string.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Unix timestamp the token expires at.
    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    /// Whether the token is still valid at the given Unix timestamp.
    pub fn is_valid_at(&self, now_secs: i64) -> bool {
        self.expires_at > now_secs
    }

    /// Whether the token is still valid now.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(current_timestamp())
    }

    /// Value for the Authorization header.
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.raw)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Persists the access token across sessions.
pub struct TokenStore<'a> {
    store: &'a ClientStore,
}

impl<'a> TokenStore<'a> {
    /// Bind to a client store.
    pub fn new(store: &'a ClientStore) -> Self {
        Self { store }
    }

    /// Load the stored token. A stored value that no longer parses is
    /// treated as absent.
    pub fn load(&self) -> Result<Option<AccessToken>, SessionError> {
        let raw: Option<String> = self.store.get(ACCESS_TOKEN_KEY)?;
        match raw {
            Some(raw) => Ok(AccessToken::parse(raw).ok()),
            None => Ok(None),
        }
    }

    /// Load the stored token only if it has not expired.
    pub fn valid_token(&self) -> Result<Option<AccessToken>, SessionError> {
        Ok(self.load()?.filter(AccessToken::is_valid))
    }

    /// Persist a token.
    pub fn save(&self, token: &AccessToken) -> Result<(), SessionError> {
        self.store.set(ACCESS_TOKEN_KEY, &token.raw())
    }

    /// Remove the stored token.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.store.delete(ACCESS_TOKEN_KEY)
    }
}
