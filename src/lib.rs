//! Shortcache - A short-link redirector
//!
//! Resolves short keys to URLs stored in object storage, serving hot keys
//! from a bounded in-memory LRU cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod resolver;
pub mod store;

pub use api::AppState;
pub use cache::UrlCache;
pub use config::Config;
pub use resolver::{Outcome, Resolver};
