//! Cache Module
//!
//! Provides the bounded in-memory key to URL cache with LRU eviction.

mod entry;
mod lru;
mod shared;
mod store;


// Re-export public types
pub(crate) use entry::CacheEntry;
pub(crate) use lru::LruList;
pub use shared::UrlCache;
pub use store::LruStore;

// == Public Constants ==
/// Default number of entries held by the cache
pub const DEFAULT_CAPACITY: usize = 1024;
