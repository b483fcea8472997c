//! API Handlers
//!
//! HTTP request handlers for lookups and registrations.

use std::borrow::Cow;
use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    http::{Method, Uri},
    Form,
};

use crate::cache::UrlCache;
use crate::config::Config;
use crate::error::{ResolverError, Result};
use crate::models::RegisterRequest;
use crate::resolver::{Outcome, Resolver};
use crate::store::ObjectStore;

/// Application state shared across all handlers.
///
/// Contains the resolver, which owns the cache and the object store client.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<Resolver>,
}

impl AppState {
    /// Creates a new AppState around a resolver.
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    /// Creates a new AppState from configuration and a store.
    ///
    /// Initializes the cache with the configured capacity.
    pub fn from_config(config: &Config, store: Arc<dyn ObjectStore>) -> Self {
        let cache = UrlCache::new(config.cache_capacity);
        Self::new(Resolver::new(cache, store))
    }
}

/// Handler for every request not routed elsewhere
///
/// Resolves the percent-decoded request path, including its leading slash,
/// as the key. Only GET is a lookup; every other method gets a 404.
pub async fn resolve_handler(State(state): State<AppState>, method: Method, uri: Uri) -> Outcome {
    state.resolver.resolve(&method, &request_key(&uri)).await
}

/// Decodes the path so it matches keys registered through the form body.
/// A path that does not decode to UTF-8 is used as is.
fn request_key(uri: &Uri) -> Cow<'_, str> {
    let path = uri.path();
    urlencoding::decode(path).unwrap_or(Cow::Borrowed(path))
}

/// Handler for POST /register
///
/// Stores `key -> url` from the form body and answers `ok`. A body that is
/// not a form is reported as an invalid request.
pub async fn register_handler(
    State(state): State<AppState>,
    form: std::result::Result<Form<RegisterRequest>, FormRejection>,
) -> Result<&'static str> {
    let Form(req) =
        form.map_err(|rejection| ResolverError::InvalidRequest(rejection.body_text()))?;

    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(ResolverError::InvalidRequest(error_msg));
    }

    state.resolver.register(&req.key, &req.url).await?;

    Ok("ok")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn test_state(store: Arc<MemoryStore>) -> AppState {
        AppState::from_config(&Config::default(), store)
    }

    fn register_form(
        key: &str,
        url: &str,
    ) -> std::result::Result<Form<RegisterRequest>, FormRejection> {
        Ok(Form(RegisterRequest {
            key: key.to_string(),
            url: url.to_string(),
        }))
    }

    #[tokio::test]
    async fn test_register_and_resolve_handler() {
        let store = Arc::new(MemoryStore::new());
        let state = test_state(store.clone());

        let result = register_handler(
            State(state.clone()),
            register_form("abc", "https://example.com/x"),
        )
        .await;
        assert_eq!(result.unwrap(), "ok");

        let outcome =
            resolve_handler(State(state), Method::GET, Uri::from_static("/abc")).await;
        assert_eq!(outcome, Outcome::Found("https://example.com/x".to_string()));
        assert_eq!(store.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_resolve_handler_unknown_key() {
        let state = test_state(Arc::new(MemoryStore::new()));

        let outcome =
            resolve_handler(State(state), Method::GET, Uri::from_static("/nope")).await;
        assert_eq!(outcome, Outcome::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_handler_uses_path_only() {
        let store = Arc::new(MemoryStore::new().with_object("/abc", "https://example.com/x"));
        let state = test_state(store);

        let outcome = resolve_handler(
            State(state),
            Method::GET,
            Uri::from_static("http://short.example/abc?utm=1"),
        )
        .await;
        assert_eq!(outcome, Outcome::Found("https://example.com/x".to_string()));
    }

    #[tokio::test]
    async fn test_resolve_handler_decodes_path() {
        let store = Arc::new(MemoryStore::new());
        let state = test_state(store.clone());
        state
            .resolver
            .register("/a b", "https://example.com/x")
            .await
            .unwrap();

        let outcome =
            resolve_handler(State(state), Method::GET, Uri::from_static("/a%20b")).await;
        assert_eq!(outcome, Outcome::Found("https://example.com/x".to_string()));
        assert_eq!(store.fetch_count(), 0);
    }

    #[test]
    fn test_request_key_keeps_undecodable_path() {
        let uri = Uri::from_static("/caf%C3%A9");
        assert_eq!(request_key(&uri), "/caf\u{e9}");

        let uri = Uri::from_static("/bad%FF");
        assert_eq!(request_key(&uri), "/bad%FF");
    }

    #[tokio::test]
    async fn test_register_invalid_request() {
        let state = test_state(Arc::new(MemoryStore::new()));

        let result = register_handler(State(state), register_form("", "https://example.com")).await;
        assert!(matches!(result, Err(ResolverError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_register_store_failure() {
        let store = Arc::new(MemoryStore::new());
        store.set_fail_writes(true);
        let state = test_state(store);

        let result =
            register_handler(State(state), register_form("abc", "https://example.com")).await;
        assert!(matches!(result, Err(ResolverError::Store(_))));
    }
}
