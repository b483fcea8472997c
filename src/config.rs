//! Configuration Module
//!
//! Handles loading server configuration from command-line flags and
//! environment variables. Flags take precedence over the environment.

use clap::Parser;

use crate::cache::DEFAULT_CAPACITY;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;
/// Default bucket holding the key objects
pub const DEFAULT_BUCKET: &str = "lovingly-shortened";
/// Default read path in front of the bucket
pub const DEFAULT_CODEBASE: &str = "http://d1gssjv4jvarn7.cloudfront.net";
/// Default object store write endpoint
pub const DEFAULT_STORE_ENDPOINT: &str = "https://s3.amazonaws.com";

/// Server configuration parameters.
///
/// # Flags / Environment Variables
/// - `--port` / `PORT` - HTTP server port (default: 3000)
/// - `--bucket` / `S3_BUCKET` - Bucket to save shortened urls to
/// - `--codebase` / `CODEBASE` - Read path URL prefix
/// - `--store-endpoint` / `S3_ENDPOINT` - Object store write endpoint
/// - `--cache-capacity` / `CACHE_CAPACITY` - Maximum cached keys (default: 1024)
#[derive(Debug, Clone, Parser)]
#[command(name = "shortcache")]
#[command(version, about = "Redirects short keys to URLs stored in object storage", long_about = None)]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Bucket to save shortened urls to
    #[arg(long, env = "S3_BUCKET", default_value = DEFAULT_BUCKET)]
    pub bucket: String,

    /// Read path URL prefix (typically a CDN in front of the bucket)
    #[arg(long, env = "CODEBASE", default_value = DEFAULT_CODEBASE)]
    pub codebase: String,

    /// Object store endpoint that accepts writes
    #[arg(long, env = "S3_ENDPOINT", default_value = DEFAULT_STORE_ENDPOINT)]
    pub store_endpoint: String,

    /// Maximum number of keys held in the in-memory cache
    #[arg(long, env = "CACHE_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    pub cache_capacity: usize,
}

impl Config {
    /// Parses configuration from the process arguments and environment.
    ///
    /// Exits with a usage message on invalid input.
    pub fn from_args() -> Self {
        Self::parse()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bucket: DEFAULT_BUCKET.to_string(),
            codebase: DEFAULT_CODEBASE.to_string(),
            store_endpoint: DEFAULT_STORE_ENDPOINT.to_string(),
            cache_capacity: DEFAULT_CAPACITY,
        }
    }
}
