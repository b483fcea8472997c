//! Shared Cache Handle
//!
//! Thread-safe front for `LruStore`, cloned into every request task.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::LruStore;

// == URL Cache ==
/// Bounded, thread-safe key to URL cache with LRU eviction.
///
/// Clones share the same underlying store. The lock is held only for the
/// duration of a single operation and never across an `.await`.
#[derive(Debug, Clone)]
pub struct UrlCache {
    inner: Arc<Mutex<LruStore>>,
}

impl UrlCache {
    /// Creates a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LruStore::new(capacity))),
        }
    }

    /// Looks up `key`, refreshing its recency on a hit.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().get(key)
    }

    /// Populates `key` unless another writer got there first.
    ///
    /// Returns true if the value was newly inserted.
    pub fn insert_if_absent(&self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let (inserted, evicted) = self.inner.lock().insert_if_absent(key.into(), value.into());
        if let Some(evicted) = evicted {
            debug!(key = %evicted, "evicted least recently used entry");
        }
        inserted
    }

    /// Stores `value` under `key`, replacing any cached value.
    pub fn insert_or_replace(&self, key: impl Into<String>, value: impl Into<String>) {
        let evicted = self.inner.lock().insert_or_replace(key.into(), value.into());
        if let Some(evicted) = evicted {
            debug!(key = %evicted, "evicted least recently used entry");
        }
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }
}
