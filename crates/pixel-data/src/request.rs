//! Request assembly.
//!
//! Every storefront call starts here: a method, a path, headers, and an
//! optional body, accumulated immutably until the client sends it.

use crate::FetchError;
use serde::Serialize;
use std::collections::HashMap;

/// Request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    /// The wire spelling of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

/// An HTTP request under construction.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<Vec<u8>>,
}

impl RequestBuilder {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Set a header, replacing any previous value under the same name.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set several headers at once.
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Append a query parameter to the URL.
    ///
    /// Values are expected to be URL-safe already; cart codes and
    /// numeric ids are.
    pub fn query(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        let sep = if self.url.contains('?') { '&' } else { '?' };
        self.url.push(sep);
        self.url.push_str(key.as_ref());
        self.url.push('=');
        self.url.push_str(value.as_ref());
        self
    }

    /// Attach a raw byte body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach a plain-text body, defaulting the content type if unset.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.headers
            .entry("Content-Type".to_string())
            .or_insert_with(|| "text/plain".to_string());
        self.body = Some(text.into_bytes());
        self
    }

    /// Attach a JSON body and mark the content type accordingly.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        let json = serde_json::to_vec(value)?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// Authorize with a bearer token.
    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }

    /// Set the Content-Type header.
    pub fn content_type(self, content_type: impl Into<String>) -> Self {
        self.header("Content-Type", content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parameters_append() {
        let builder = RequestBuilder::new(Method::Get, "/get_cart_stat")
            .query("cart_code", "k3J9vQ2xLm0");
        assert_eq!(builder.url, "/get_cart_stat?cart_code=k3J9vQ2xLm0");

        let builder = builder.query("product_id", "9");
        assert_eq!(builder.url, "/get_cart_stat?cart_code=k3J9vQ2xLm0&product_id=9");
    }

    #[test]
    fn test_json_body_sets_content_type() {
        #[derive(Serialize)]
        struct Body {
            item_id: i64,
        }

        let builder = RequestBuilder::new(Method::Post, "/delete_cartitem")
            .json(&Body { item_id: 21 })
            .unwrap();

        assert_eq!(
            builder.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(builder.body.as_deref(), Some(br#"{"item_id":21}"# as &[u8]));
    }

    #[test]
    fn test_bearer_auth_header() {
        let builder = RequestBuilder::new(Method::Get, "/get_username").bearer_auth("tok");
        assert_eq!(
            builder.headers.get("Authorization").map(String::as_str),
            Some("Bearer tok")
        );
    }

    #[test]
    fn test_method_strings() {
        assert_eq!(Method::Patch.as_str(), "PATCH");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }
}
