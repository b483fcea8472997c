//! Read path response classification.
//!
//! The CDN in front of the bucket does not reliably pass a missing object's
//! status through, so a missing key is recognised by the XML error document
//! the bucket returns in its place. Everything else that carries a body is
//! taken to be the stored URL, even when the status is an error.

use crate::resolver::{Outcome, TransientError};
use crate::store::{FetchedObject, StoreError};

/// Prefix of the object store's XML error documents.
pub const NOT_FOUND_MARKER: &str = "<?xml";

/// Returns true if `body` is the read path's "no such object" response.
pub fn is_not_found_marker(body: &str) -> bool {
    body.starts_with(NOT_FOUND_MARKER)
}

/// Turns a read path result into an `Outcome`.
///
/// - no response at all: `TransientError`
/// - error status with an empty body: `TransientError` carrying the status
/// - body starting with `NOT_FOUND_MARKER`: `NotFound`
/// - success status with an empty body: `NotFound`
/// - any other body: `Found(body)`
///
/// Trailing whitespace, such as the newline left by an upload tool, is not
/// part of the stored URL.
pub fn classify(result: Result<FetchedObject, StoreError>) -> Outcome {
    let mut fetched = match result {
        Ok(fetched) => fetched,
        Err(err) => {
            return Outcome::TransientError(TransientError::new(err.status(), err.to_string()))
        }
    };

    let trimmed = fetched.body.trim_end_matches(|c: char| c.is_ascii_whitespace()).len();
    fetched.body.truncate(trimmed);

    if fetched.body.is_empty() {
        if fetched.status.is_success() {
            return Outcome::NotFound;
        }
        return Outcome::TransientError(TransientError::new(
            Some(fetched.status),
            format!("read path returned {} with no body", fetched.status),
        ));
    }

    if is_not_found_marker(&fetched.body) {
        return Outcome::NotFound;
    }

    Outcome::Found(fetched.body)
}
