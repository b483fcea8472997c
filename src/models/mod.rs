//! Request and Response models for the redirect server
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! deserializing form bodies and serializing error bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::RegisterRequest;
pub use responses::ErrorResponse;
