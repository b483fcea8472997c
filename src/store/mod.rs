//! Object Store Module
//!
//! The durable key to URL mapping lives in object storage. Writes go to the
//! bucket directly; reads go through an HTTP front (typically a CDN) that
//! returns the stored bytes as the response body.
//!
//! # Implementations
//! - `HttpObjectStore` - reqwest-backed read path and bucket writes
//! - `MemoryStore` - in-process map that mimics the read path responses

mod http;
mod memory;

use async_trait::async_trait;
use axum::http::StatusCode;
use thiserror::Error;

pub use http::HttpObjectStore;
pub use memory::{MemoryStore, NO_SUCH_KEY_BODY};

// == Store Error ==
/// Failures talking to the object store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Connection, protocol, or body read failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status
    #[error("object store returned {0}")]
    Status(StatusCode),

    /// The store could not be reached or refused the operation
    #[error("object store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Returns the HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            StoreError::Transport(err) => err.status(),
            StoreError::Status(status) => Some(*status),
            StoreError::Unavailable(_) => None,
        }
    }
}

// == Fetched Object ==
/// Raw response from the read path: status and body, unclassified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedObject {
    pub status: StatusCode,
    pub body: String,
}

impl FetchedObject {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

// == Object Store Trait ==
/// Durable store behind the cache.
///
/// Implementations must be cancel-safe: dropping a pending `fetch` or `put`
/// future abandons the outbound call.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Reads `key` through the HTTP read path.
    ///
    /// Returns whatever the read path answered, whatever the status. Only
    /// failures to obtain a response at all are errors.
    async fn fetch(&self, key: &str) -> Result<FetchedObject, StoreError>;

    /// Writes `body` under `key`, overwriting any existing object.
    async fn put(&self, key: &str, body: &str) -> Result<(), StoreError>;
}

/// Object name for a key: the key without its leading slashes.
pub fn object_name(key: &str) -> &str {
    key.trim_start_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_name_strips_leading_slash() {
        assert_eq!(object_name("/abc"), "abc");
        assert_eq!(object_name("abc"), "abc");
        assert_eq!(object_name("/a/b"), "a/b");
    }

    #[test]
    fn test_store_error_status() {
        assert_eq!(
            StoreError::Status(StatusCode::FORBIDDEN).status(),
            Some(StatusCode::FORBIDDEN)
        );
        assert_eq!(StoreError::Unavailable("down".to_string()).status(), None);
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Status(StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "object store returned 502 Bad Gateway");

        let err = StoreError::Unavailable("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
