//! Error types for the redirect server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use thiserror::Error;

use crate::models::ErrorResponse;
use crate::store::StoreError;

// == Resolver Error Enum ==
/// Errors surfaced by the registration path.
///
/// Lookups never fail this way; they report through `resolver::Outcome`.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The object store rejected or never received the write
    #[error("Write failed: {0}")]
    Store(#[from] StoreError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ResolverError {
    fn into_response(self) -> Response {
        let status = match &self {
            ResolverError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ResolverError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the redirect server.
pub type Result<T> = std::result::Result<T, ResolverError>;
