//! Shortcache - A short-link redirector
//!
//! Resolves short keys to URLs stored in object storage, serving hot keys
//! from a bounded in-memory LRU cache.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shortcache::api::create_router;
use shortcache::store::HttpObjectStore;
use shortcache::{AppState, Config};

/// Main entry point for the redirect server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from flags and environment variables
/// 3. Create the object store client and the cache
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shortcache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting shortcache redirect server");

    let config = Config::from_args();
    info!(
        "Configuration loaded: port={}, bucket={}, codebase={}, store_endpoint={}, cache_capacity={}",
        config.port, config.bucket, config.codebase, config.store_endpoint, config.cache_capacity
    );

    let store = HttpObjectStore::new(
        config.codebase.as_str(),
        config.store_endpoint.as_str(),
        config.bucket.as_str(),
    )
    .context("Failed to create object store client")?;

    let state = AppState::from_config(&config, Arc::new(store));
    info!(
        "Cache initialized with capacity {}",
        state.resolver.cache().capacity()
    );

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
