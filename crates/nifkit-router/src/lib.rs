//! nifkit Router
//!
//! HTTP front end that turns posted documents into NIF graphs and stores
//! them in a SPARQL triple store.
//!
//! # Routes
//!
//! - `POST /process`: validate, annotate, store; answers with the graph
//!   locator and browse links
//! - `GET /health`: liveness
//! - `GET /sparql`: where stored graphs can be queried

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod pipeline;
pub mod retry;

use config::{ConfigError, ServerConfig};
use handlers::{create_router, AppState};
use nifkit_store::{SparqlStore, StoreError};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Router error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Store client could not be created
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP server
///
/// Builds the store client and processing pipeline from `config` and
/// serves until the process is stopped. Tracing must be initialized by the
/// caller.
pub async fn start_server(config: ServerConfig) -> Result<(), RouterError> {
    config.validate()?;

    info!("Starting nifkit router");
    info!("Bind address: {}", config.bind_addr());
    info!("Resource base: {}", config.annotator.resource_base);
    info!(
        "Store: {} ({:?}, timeout {}s)",
        config.store.endpoint, config.store.protocol, config.store.timeout_secs
    );
    info!("Store attempts per graph: {}", config.retry.max_attempts);

    let store = Arc::new(SparqlStore::new(config.store.clone())?);
    let state = AppState::from_config(&config, store)?;

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Router listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| RouterError::Server(e.to_string()))?;

    Ok(())
}
