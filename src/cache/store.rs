//! LRU Store Module
//!
//! Fixed-capacity key-value engine combining a HashMap index with the
//! recency list. Not synchronized; see `UrlCache` for the shared handle.

use std::collections::HashMap;

use crate::cache::LruList;

// == LRU Store ==
/// Fixed-capacity map from short key to target URL with LRU eviction.
#[derive(Debug)]
pub struct LruStore {
    /// Key to slot index in `order`
    index: HashMap<String, usize>,
    /// Recency order, owns the entries
    order: LruList,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl LruStore {
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` entries.
    ///
    /// A capacity of zero is accepted; such a store never retains anything.
    pub fn new(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            order: LruList::with_capacity(capacity),
            capacity,
        }
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A miss leaves the store untouched.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let idx = *self.index.get(key)?;
        self.order.touch(idx);
        Some(self.order.entry(idx).value.clone())
    }

    // == Insert If Absent ==
    /// Stores `value` under `key` unless the key is already present.
    ///
    /// An existing value is kept as is but still becomes most recently used.
    /// Returns whether the value was inserted, plus the key evicted to make
    /// room, if any.
    pub fn insert_if_absent(&mut self, key: String, value: String) -> (bool, Option<String>) {
        if let Some(&idx) = self.index.get(&key) {
            self.order.touch(idx);
            return (false, None);
        }

        (true, self.insert_new(key, value))
    }

    // == Insert Or Replace ==
    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// Returns the key evicted to make room, if any.
    pub fn insert_or_replace(&mut self, key: String, value: String) -> Option<String> {
        if let Some(&idx) = self.index.get(&key) {
            self.order.entry_mut(idx).value = value;
            self.order.touch(idx);
            return None;
        }

        self.insert_new(key, value)
    }

    // == Capacity ==
    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    fn insert_new(&mut self, key: String, value: String) -> Option<String> {
        if self.capacity == 0 {
            return None;
        }

        let mut evicted = None;
        if self.order.len() >= self.capacity {
            if let Some((old_key, _)) = self.order.pop_back() {
                self.index.remove(&old_key);
                evicted = Some(old_key);
            }
        }

        let idx = self.order.push_front(key.clone(), value);
        self.index.insert(key, idx);
        evicted
    }
}
