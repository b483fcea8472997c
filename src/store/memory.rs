//! In-memory object store that answers like the HTTP read path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use parking_lot::Mutex;

use super::{object_name, FetchedObject, ObjectStore, StoreError};

/// Body the read path returns for a missing object.
pub const NO_SUCH_KEY_BODY: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    "\n",
    "<Error><Code>NoSuchKey</Code><Message>The specified key does not exist.</Message></Error>"
);

/// HashMap-backed object store.
///
/// Present objects come back as `200` with the stored body, missing ones as
/// `404` with an S3-style XML error body. Latency and failures can be
/// injected, and every fetch is counted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<String, String>>,
    latency: Option<Duration>,
    fetches: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an object.
    pub fn with_object(self, key: &str, body: impl Into<String>) -> Self {
        self.objects
            .lock()
            .insert(object_name(key).to_string(), body.into());
        self
    }

    /// Delays every fetch and put by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Makes subsequent fetches fail as if the read path were unreachable.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes subsequent puts fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of fetches issued so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Returns the stored body for `key`, bypassing the read path.
    pub fn object(&self, key: &str) -> Option<String> {
        self.objects.lock().get(object_name(key)).cloned()
    }

    async fn delay(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn fetch(&self, key: &str) -> Result<FetchedObject, StoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.delay().await;

        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("read path unreachable".to_string()));
        }

        let found = self.objects.lock().get(object_name(key)).cloned();
        Ok(match found {
            Some(body) => FetchedObject::new(StatusCode::OK, body),
            None => FetchedObject::new(StatusCode::NOT_FOUND, NO_SUCH_KEY_BODY),
        })
    }

    async fn put(&self, key: &str, body: &str) -> Result<(), StoreError> {
        self.delay().await;

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("bucket rejected write".to_string()));
        }

        self.objects
            .lock()
            .insert(object_name(key).to_string(), body.to_string());
        Ok(())
    }
}
