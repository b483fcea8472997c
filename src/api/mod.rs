//! API Module
//!
//! HTTP handlers and routing for the redirect server.
//!
//! # Endpoints
//! - `POST /register` - Store a key to URL mapping
//! - `GET /<any-path>` - Redirect to the URL stored for the path

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
