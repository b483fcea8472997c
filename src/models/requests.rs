//! Request DTOs for the redirect server
//!
//! Defines the structure of incoming HTTP request bodies.

use axum::http::HeaderValue;
use serde::Deserialize;

/// Form body for `POST /register`
///
/// # Fields
/// - `key`: The short key, with or without a leading slash
/// - `url`: The target URL to redirect to
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// The short key
    #[serde(default)]
    pub key: String,
    /// The target URL
    #[serde(default)]
    pub url: String,
}

impl RegisterRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.trim_start_matches('/').is_empty() {
            return Some("key cannot be empty".to_string());
        }
        if self.url.is_empty() {
            return Some("url cannot be empty".to_string());
        }
        if HeaderValue::from_str(&self.url).is_err() {
            return Some("url is not a valid redirect location".to_string());
        }
        None
    }
}
