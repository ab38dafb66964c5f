//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body as raw bytes.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the response status indicates a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Check if the response status indicates a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Get the response body as a string.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::Parse(format!("Invalid UTF-8 in response body: {}", e)))
    }

    /// Deserialize the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(FetchError::from)
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == name_lower)
            .map(|(_, v)| v.as_str())
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Extract a human-readable error message from the response body.
    ///
    /// Backends report failures as JSON objects with a `detail`, `error`
    /// or `message` field. Falls back to the raw body text, then to the
    /// bare status code.
    pub fn error_message(&self) -> String {
        if let Ok(value) = serde_json::from_slice::<serde_json::Value>(&self.body) {
            for key in ["detail", "error", "message"] {
                if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                    return message.to_string();
                }
            }
        }
        match self.text() {
            Ok(text) if !text.trim().is_empty() => text,
            _ => format!("HTTP {}", self.status),
        }
    }

    /// Convert to an error if the status indicates failure.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_client_error() || self.is_server_error() {
            Err(FetchError::Http {
                status: self.status,
                message: self.error_message(),
            })
        } else {
            Ok(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn make_response(status: u16, body: &str) -> Response {
        Response::new(status, HashMap::new(), body.as_bytes().to_vec())
    }

    // === Status Tests ===

    #[test]
    fn test_status_ranges() {
        assert!(make_response(200, "").is_success());
        assert!(make_response(204, "").is_success());
        assert!(!make_response(301, "").is_success());
        assert!(make_response(404, "").is_client_error());
        assert!(make_response(503, "").is_server_error());
        assert!(!make_response(404, "").is_server_error());
    }

    // === Body Tests ===

    #[test]
    fn test_text_and_json() {
        #[derive(Deserialize)]
        struct Stat {
            num_of_items: i64,
        }

        let resp = make_response(200, r#"{"num_of_items":4}"#);
        assert_eq!(resp.text().unwrap(), r#"{"num_of_items":4}"#);
        let stat: Stat = resp.json().unwrap();
        assert_eq!(stat.num_of_items, 4);
    }

    #[test]
    fn test_json_failure_maps_to_error() {
        let resp = make_response(200, "not json");
        let result: Result<serde_json::Value, _> = resp.json();
        assert!(matches!(result, Err(FetchError::Json(_))));
    }

    // === Header Tests ===

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let resp = Response::new(200, headers, Vec::new());
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(resp.content_type(), Some("application/json"));
        assert_eq!(resp.header("x-missing"), None);
    }

    // === Error Tests ===

    #[test]
    fn test_error_message_prefers_json_fields() {
        let resp = make_response(400, r#"{"detail":"Cart not found"}"#);
        assert_eq!(resp.error_message(), "Cart not found");

        let resp = make_response(400, r#"{"error":"Invalid quantity"}"#);
        assert_eq!(resp.error_message(), "Invalid quantity");

        let resp = make_response(500, "upstream exploded");
        assert_eq!(resp.error_message(), "upstream exploded");

        let resp = make_response(500, "");
        assert_eq!(resp.error_message(), "HTTP 500");
    }

    #[test]
    fn test_error_for_status() {
        assert!(make_response(200, "").error_for_status().is_ok());

        let err = make_response(404, r#"{"detail":"No Product matches the given query."}"#)
            .error_for_status()
            .unwrap_err();
        match err {
            FetchError::Http { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "No Product matches the given query.");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
