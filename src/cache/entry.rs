//! Cache Entry Module
//!
//! Defines a single slot of the recency list: the key, the resolved URL, and
//! the links to its neighbours.

// == Cache Entry ==
/// A key mapped to its target URL, linked into the recency list.
///
/// `prev` points towards the most recently used end, `next` towards the
/// least recently used end. Both are slot indices into the owning list.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The short key (inbound path)
    pub key: String,
    /// The resolved target URL
    pub value: String,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an unlinked entry.
    pub fn new(key: String, value: String) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }
}
