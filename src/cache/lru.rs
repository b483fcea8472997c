//! LRU List Module
//!
//! Doubly linked recency list stored in a slab of `CacheEntry` slots.

use std::mem;

use crate::cache::CacheEntry;

// == LRU List ==
/// Orders entries by access time for LRU eviction.
///
/// Entries live in a `Vec` and link to each other by index, so moving an
/// entry to the front or dropping the back is O(1):
/// - Front (`head`) = Most recently used
/// - Back (`tail`) = Least recently used
///
/// Slots freed by eviction are reused by the next push.
#[derive(Debug, Default)]
pub struct LruList {
    slots: Vec<CacheEntry>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl LruList {
    // == Constructor ==
    /// Creates an empty list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    // == Push Front ==
    /// Inserts a new entry as the most recently used and returns its slot.
    pub fn push_front(&mut self, key: String, value: String) -> usize {
        let entry = CacheEntry::new(key, value);
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = entry;
                idx
            }
            None => {
                self.slots.push(entry);
                self.slots.len() - 1
            }
        };

        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Touch ==
    /// Marks the entry in `idx` as most recently used.
    pub fn touch(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Pop Back ==
    /// Removes the least recently used entry and returns its key and value.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<(String, String)> {
        let idx = self.tail?;
        self.unlink(idx);
        self.free.push(idx);
        self.len -= 1;

        let slot = &mut self.slots[idx];
        Some((mem::take(&mut slot.key), mem::take(&mut slot.value)))
    }

    // == Accessors ==
    /// Returns the entry stored in `idx`.
    pub fn entry(&self, idx: usize) -> &CacheEntry {
        &self.slots[idx]
    }

    /// Returns the entry stored in `idx` for in-place update.
    pub fn entry_mut(&mut self, idx: usize) -> &mut CacheEntry {
        &mut self.slots[idx]
    }

    /// Returns the key of the least recently used entry without removing it.
    #[cfg(test)]
    pub fn peek_oldest(&self) -> Option<&str> {
        self.tail.map(|idx| self.slots[idx].key.as_str())
    }

    // == Length ==
    /// Returns the number of linked entries.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = {
            let slot = &self.slots[idx];
            (slot.prev, slot.next)
        };

        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }

        let slot = &mut self.slots[idx];
        slot.prev = None;
        slot.next = None;
    }

    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;
        {
            let slot = &mut self.slots[idx];
            slot.prev = None;
            slot.next = old_head;
        }

        match old_head {
            Some(h) => self.slots[h].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn push(list: &mut LruList, key: &str) -> usize {
        list.push_front(key.to_string(), format!("https://example.com/{}", key))
    }

    #[test]
    fn test_lru_new() {
        let lru = LruList::with_capacity(4);
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
        assert_eq!(lru.peek_oldest(), None);
    }

    #[test]
    fn test_lru_push_new_keys() {
        let mut lru = LruList::with_capacity(4);

        push(&mut lru, "key1");
        push(&mut lru, "key2");
        push(&mut lru, "key3");

        assert_eq!(lru.len(), 3);
        // key1 is oldest (added first)
        assert_eq!(lru.peek_oldest(), Some("key1"));
    }

    #[test]
    fn test_lru_touch_existing_key() {
        let mut lru = LruList::with_capacity(4);

        let first = push(&mut lru, "key1");
        push(&mut lru, "key2");
        push(&mut lru, "key3");

        lru.touch(first);

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.peek_oldest(), Some("key2"));
    }

    #[test]
    fn test_lru_touch_head_is_noop() {
        let mut lru = LruList::with_capacity(4);

        push(&mut lru, "key1");
        let last = push(&mut lru, "key2");

        lru.touch(last);
        lru.touch(last);

        assert_eq!(lru.len(), 2);
        assert_eq!(lru.peek_oldest(), Some("key1"));
    }

    #[test]
    fn test_lru_pop_back() {
        let mut lru = LruList::with_capacity(4);

        push(&mut lru, "key1");
        push(&mut lru, "key2");
        push(&mut lru, "key3");

        let (key, value) = lru.pop_back().unwrap();
        assert_eq!(key, "key1");
        assert_eq!(value, "https://example.com/key1");
        assert_eq!(lru.len(), 2);

        let (key, _) = lru.pop_back().unwrap();
        assert_eq!(key, "key2");
        assert_eq!(lru.len(), 1);
    }

    #[test]
    fn test_lru_pop_empty() {
        let mut lru = LruList::with_capacity(1);
        assert_eq!(lru.pop_back(), None);
    }

    #[test]
    fn test_lru_order_after_multiple_touches() {
        let mut lru = LruList::with_capacity(3);

        let a = push(&mut lru, "a");
        let b = push(&mut lru, "b");
        let c = push(&mut lru, "c");

        // front=[b, c, a]=back after these touches
        lru.touch(a);
        lru.touch(c);
        lru.touch(b);

        assert_eq!(lru.pop_back().map(|(k, _)| k), Some("a".to_string()));
        assert_eq!(lru.pop_back().map(|(k, _)| k), Some("c".to_string()));
        assert_eq!(lru.pop_back().map(|(k, _)| k), Some("b".to_string()));
        assert!(lru.is_empty());
    }

    #[test]
    fn test_lru_reuses_freed_slots() {
        let mut lru = LruList::with_capacity(2);

        let first = push(&mut lru, "key1");
        push(&mut lru, "key2");
        lru.pop_back();

        let reused = push(&mut lru, "key3");
        assert_eq!(reused, first);
        assert_eq!(lru.entry(reused).key, "key3");
        assert_eq!(lru.peek_oldest(), Some("key2"));
    }

    #[test]
    fn test_lru_entry_mut_updates_value() {
        let mut lru = LruList::with_capacity(1);

        let idx = push(&mut lru, "key1");
        lru.entry_mut(idx).value = "https://example.com/other".to_string();

        assert_eq!(lru.entry(idx).value, "https://example.com/other");
    }

    #[test]
    fn test_lru_single_entry_touch_and_pop() {
        let mut lru = LruList::with_capacity(1);

        let idx = push(&mut lru, "only");
        lru.touch(idx);

        assert_eq!(lru.pop_back().map(|(k, _)| k), Some("only".to_string()));
        assert!(lru.is_empty());
        assert_eq!(lru.peek_oldest(), None);
    }
}
