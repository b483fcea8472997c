//! Response DTOs for the redirect server
//!
//! Defines the structure of outgoing error bodies.

use serde::Serialize;

/// Error response body for failed registrations and lookups
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
