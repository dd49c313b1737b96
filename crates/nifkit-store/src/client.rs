//! HTTP store client
//!
//! Sends one finished graph to the backend in exactly one request.

use crate::config::{StoreConfig, StoreProtocol};
use crate::error::StoreError;
use crate::sparql;
use async_trait::async_trait;
use nifkit_domain::{AnnotationGraph, Iri};
use tracing::{debug, info, warn};

/// Backend that accepts a whole annotation graph at once
///
/// Implementations must either persist every statement of `graph` under
/// `graph_iri` or report failure; there are no partial batches.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Persist `graph` into the named graph `graph_iri`
    async fn store(&self, graph: &AnnotationGraph, graph_iri: &Iri) -> Result<(), StoreError>;
}

/// [`GraphStore`] backed by a SPARQL 1.1 endpoint over HTTP
pub struct SparqlStore {
    config: StoreConfig,
    client: reqwest::Client,
}

impl SparqlStore {
    /// Create a client for the configured backend
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the configuration is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        config.validate().map_err(StoreError::Config)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| StoreError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn request(&self, graph: &AnnotationGraph, graph_iri: &Iri) -> reqwest::RequestBuilder {
        let request = match self.config.protocol {
            StoreProtocol::SparqlUpdate => self
                .client
                .post(self.config.update_url())
                .header(reqwest::header::CONTENT_TYPE, "application/sparql-update")
                .body(sparql::insert_data(graph, graph_iri)),
            StoreProtocol::GraphStore => self
                .client
                .post(self.config.graph_store_url())
                .query(&[("graph", graph_iri.as_str())])
                .header(reqwest::header::CONTENT_TYPE, "application/n-triples")
                .body(sparql::ntriples(graph)),
        };

        match &self.config.username {
            Some(username) => request.basic_auth(username, self.config.password.as_deref()),
            None => request,
        }
    }
}

#[async_trait]
impl GraphStore for SparqlStore {
    async fn store(&self, graph: &AnnotationGraph, graph_iri: &Iri) -> Result<(), StoreError> {
        debug!(
            "Storing {} statements into {} via {:?}",
            graph.len(),
            graph_iri.as_str(),
            self.config.protocol
        );

        let response = self
            .request(graph, graph_iri)
            .send()
            .await
            .map_err(|e| StoreError::from_transport(e, self.config.timeout()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Store rejected graph {}: HTTP {}", graph_iri.as_str(), status);
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        info!("Stored {} statements into {}", graph.len(), graph_iri.as_str());
        Ok(())
    }
}
