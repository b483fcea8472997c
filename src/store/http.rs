//! HTTP object store: reads through the CDN front, writes to the bucket.

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::{debug, warn};

use super::{object_name, FetchedObject, ObjectStore, StoreError};

/// Object store reached over plain HTTP.
///
/// Reads issue `GET <codebase><key>`. Writes issue
/// `PUT <endpoint>/<bucket>/<object>` where the object name is the key
/// without its leading slash, matching what the read path serves.
#[derive(Debug, Clone)]
pub struct HttpObjectStore {
    client: Client,
    codebase: String,
    endpoint: String,
    bucket: String,
}

impl HttpObjectStore {
    /// Creates a store with a fresh pooled client.
    pub fn new(
        codebase: impl Into<String>,
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, codebase, endpoint, bucket))
    }

    /// Creates a store around an existing client.
    pub fn with_client(
        client: Client,
        codebase: impl Into<String>,
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            client,
            codebase: codebase.into().trim_end_matches('/').to_string(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            bucket: bucket.into(),
        }
    }

    /// URL the read path serves `key` from.
    pub fn read_url(&self, key: &str) -> String {
        format!("{}/{}", self.codebase, object_name(key))
    }

    /// URL `key` is written to.
    pub fn write_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint, self.bucket, object_name(key))
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn fetch(&self, key: &str) -> Result<FetchedObject, StoreError> {
        let url = self.read_url(key);
        debug!(url = %url, "Fetching from read path");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(url = %url, status = %status, size = body.len(), "Fetched from read path");
        Ok(FetchedObject { status, body })
    }

    async fn put(&self, key: &str, body: &str) -> Result<(), StoreError> {
        let url = self.write_url(key);
        debug!(url = %url, "Writing object");

        let response = self
            .client
            .put(&url)
            .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(body.to_owned())
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), url = %url, "Object write rejected");
            return Err(StoreError::Status(response.status()));
        }

        Ok(())
    }
}
