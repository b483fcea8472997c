//! Resolver Module
//!
//! Turns short keys into target URLs: cache first, then the object store's
//! read path, populating the cache on a successful miss. Also handles
//! registration, which writes through to the store and the cache.

mod classify;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error, info, warn};

use crate::cache::UrlCache;
use crate::error::{ResolverError, Result};
use crate::models::ErrorResponse;
use crate::store::ObjectStore;

pub use classify::{classify, is_not_found_marker, NOT_FOUND_MARKER};

/// Body of every 404 produced by the resolve path.
pub const NOT_FOUND_BODY: &str = "url not found";

// == Outcome ==
/// Result of resolving a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The key maps to this URL
    Found(String),
    /// The key does not exist, or the request was not a lookup
    NotFound,
    /// The store could not answer
    TransientError(TransientError),
}

/// A failed lookup that says nothing about whether the key exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientError {
    /// Status to propagate, if the store supplied one
    pub status: Option<StatusCode>,
    /// Human-readable cause
    pub cause: String,
}

impl TransientError {
    pub fn new(status: Option<StatusCode>, cause: impl Into<String>) -> Self {
        Self {
            status,
            cause: cause.into(),
        }
    }

    /// Status the caller sees: the propagated one, or 500.
    pub fn response_status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Found(url) => match HeaderValue::from_str(&url) {
                Ok(location) => {
                    (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response()
                }
                Err(_) => {
                    error!(url = %url, "Stored URL is not a valid Location header");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(ErrorResponse::new("stored url is not a valid location")),
                    )
                        .into_response()
                }
            },
            Outcome::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
            Outcome::TransientError(err) => {
                (err.response_status(), Json(ErrorResponse::new(err.cause))).into_response()
            }
        }
    }
}

// == Resolver ==
/// Cache-fronted key resolution over an object store.
///
/// Concurrent misses on the same key each fetch independently; the first
/// successful populate wins and later ones leave the cached value alone.
pub struct Resolver {
    cache: UrlCache,
    store: Arc<dyn ObjectStore>,
}

impl Resolver {
    /// Creates a resolver over the given cache and store.
    pub fn new(cache: UrlCache, store: Arc<dyn ObjectStore>) -> Self {
        Self { cache, store }
    }

    /// Returns the cache this resolver populates.
    pub fn cache(&self) -> &UrlCache {
        &self.cache
    }

    // == Resolve ==
    /// Resolves `key` for a request made with `method`.
    ///
    /// Only GET is a lookup; anything else is `NotFound`. A cache hit returns
    /// without I/O. A miss fetches from the read path and caches the URL if
    /// one was found. Dropping the returned future abandons the fetch.
    pub async fn resolve(&self, method: &Method, key: &str) -> Outcome {
        if *method != Method::GET {
            debug!(method = %method, key, "Rejected non-GET lookup");
            return Outcome::NotFound;
        }

        if let Some(url) = self.cache.get(key) {
            debug!(key, "Cache hit");
            return Outcome::Found(url);
        }
        info!(key, "Cache miss");

        let outcome = classify(self.store.fetch(key).await);

        match &outcome {
            Outcome::Found(url) if HeaderValue::from_str(url).is_err() => {
                warn!(key, url = %url, "Stored URL is not a valid Location header, not caching");
            }
            Outcome::Found(url) => {
                if self.cache.insert_if_absent(key, url.as_str()) {
                    info!(key, url = %url, "Added to cache");
                }
            }
            Outcome::NotFound => warn!(key, "Key not found in object store"),
            Outcome::TransientError(err) => error!(
                key,
                status = ?err.status,
                cause = %err.cause,
                "Lookup failed"
            ),
        }

        outcome
    }

    // == Register ==
    /// Writes `key -> url` to the store, then to the cache.
    ///
    /// The key is normalized to a single leading `/` so that it matches the
    /// path a later GET arrives on. The cache is only touched once the store
    /// has accepted the write.
    pub async fn register(&self, key: &str, url: &str) -> Result<String> {
        let key = canonical_key(key);

        if let Err(err) = self.store.put(&key, url).await {
            error!(key = %key, error = %err, "Failed to write mapping");
            return Err(ResolverError::Store(err));
        }

        self.cache.insert_or_replace(key.as_str(), url);
        info!(key = %key, url, "Registered");
        Ok(key)
    }
}

/// Returns `key` with exactly one leading slash.
pub fn canonical_key(key: &str) -> String {
    format!("/{}", key.trim_start_matches('/'))
}
