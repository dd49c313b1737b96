//! nifkit Storage Layer
//!
//! Persists annotation graphs to a SPARQL-speaking triple store.
//!
//! # Architecture
//!
//! - One graph, one HTTP request: every statement goes into a single
//!   `INSERT DATA { GRAPH <g> { ... } }` body, so the backend applies the
//!   whole set or none of it
//! - Bounded timeout per request, no retries inside the client
//! - Configuration is passed in explicitly; nothing is read from the
//!   environment
//!
//! # Examples
//!
//! ```no_run
//! use nifkit_store::{GraphStore, SparqlStore, StoreConfig};
//! use nifkit_domain::{AnnotationGraph, Iri};
//!
//! # async fn example(graph: AnnotationGraph, graph_iri: Iri) -> Result<(), Box<dyn std::error::Error>> {
//! let store = SparqlStore::new(StoreConfig::default())?;
//! store.store(&graph, &graph_iri).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod config;
mod error;
pub mod sparql;

pub use client::{GraphStore, SparqlStore};
pub use config::{StoreConfig, StoreProtocol};
pub use error::StoreError;
