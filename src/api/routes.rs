//! API Routes
//!
//! Configures the Axum router for the redirect server.

use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{register_handler, resolve_handler, AppState};

/// Creates the main router.
///
/// # Endpoints
/// - `POST /register` - Store a key to URL mapping
/// - anything else - Resolve the path as a key (GET only, 404 otherwise)
///
/// `GET /register` is a lookup of the key `/register`, like any other path.
///
/// # Middleware
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/register",
            post(register_handler).fallback(resolve_handler),
        )
        .fallback(resolve_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
