//! Processing pipeline: validate, annotate, store.
//!
//! The pipeline is the only place that knows about all three stages. It
//! owns the retry policy so the store client stays a single-shot call.

use crate::config::{ConfigError, ServerConfig};
use crate::retry::RetryPolicy;
use nifkit_annotator::{AnnotatedDocument, Annotator, AnnotatorError, DocumentRequest, ValidationError};
use nifkit_domain::{Iri, ResourceId};
use nifkit_store::{GraphStore, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Why a processing request failed
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The request was rejected before anything was built
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The annotation graph could not be built consistently
    #[error("Processing failed: {0}")]
    Consistency(AnnotatorError),

    /// The finished graph could not be stored
    #[error("Failed to store data in triple store: {0}")]
    Store(#[from] StoreError),
}

impl From<AnnotatorError> for ProcessError {
    fn from(e: AnnotatorError) -> Self {
        match e {
            AnnotatorError::Validation(v) => ProcessError::Validation(v),
            other => ProcessError::Consistency(other),
        }
    }
}

/// Result of a successfully stored document
#[derive(Debug, Clone)]
pub struct ProcessingOutcome {
    /// Named graph id
    pub graph_id: ResourceId,
    /// Named graph locator
    pub graph_iri: Iri,
    /// Document resource locator
    pub document_iri: Iri,
    /// First resources in emission order
    pub sample_resources: Vec<Iri>,
    /// Number of statements stored
    pub triple_count: usize,
    /// Number of paragraphs found
    pub paragraph_count: usize,
    /// Number of sentences found
    pub sentence_count: usize,
    /// Store attempts it took
    pub attempts: u32,
}

/// Runs one document from request to stored graph
pub struct ProcessingPipeline {
    annotator: Annotator,
    store: Arc<dyn GraphStore>,
    retry: RetryPolicy,
    sample_limit: usize,
}

impl ProcessingPipeline {
    /// Create a pipeline from its parts
    pub fn new(
        annotator: Annotator,
        store: Arc<dyn GraphStore>,
        retry: RetryPolicy,
        sample_limit: usize,
    ) -> Self {
        Self {
            annotator,
            store,
            retry,
            sample_limit,
        }
    }

    /// Create a pipeline from the service configuration and a store
    pub fn from_config(config: &ServerConfig, store: Arc<dyn GraphStore>) -> Result<Self, ConfigError> {
        let annotator = Annotator::new(config.annotator.clone()).map_err(|e| ConfigError::Invalid {
            section: "annotator",
            message: e.to_string(),
        })?;

        Ok(Self::new(
            annotator,
            store,
            config.retry.clone(),
            config.sample_resource_limit,
        ))
    }

    /// The annotator in use
    pub fn annotator(&self) -> &Annotator {
        &self.annotator
    }

    /// Validate, build and store one document
    ///
    /// Validation failures never reach the store. A store failure leaves
    /// the built graph unreported; nothing is cleaned up on the backend.
    pub async fn process(&self, request: DocumentRequest) -> Result<ProcessingOutcome, ProcessError> {
        let document = self.annotator.validate(request)?;
        let annotated = self.annotator.annotate(&document)?;

        info!(
            "Built graph {} for '{}': {} paragraphs, {} sentences, {} triples",
            annotated.graph_id,
            document.name(),
            annotated.paragraphs.len(),
            annotated.sentence_count(),
            annotated.graph.len()
        );

        let attempts = self.store_with_retry(&annotated).await?;

        Ok(ProcessingOutcome {
            graph_id: annotated.graph_id,
            graph_iri: annotated.graph_iri.clone(),
            document_iri: annotated.document_iri.clone(),
            sample_resources: annotated
                .sample_resources(self.sample_limit)
                .into_iter()
                .cloned()
                .collect(),
            triple_count: annotated.graph.len(),
            paragraph_count: annotated.paragraphs.len(),
            sentence_count: annotated.sentence_count(),
            attempts,
        })
    }

    /// Store the graph, repeating transient failures with backoff
    ///
    /// Every attempt sends the same graph to the same named graph.
    async fn store_with_retry(&self, annotated: &AnnotatedDocument) -> Result<u32, StoreError> {
        let mut attempt = 1;
        loop {
            match self.store.store(&annotated.graph, &annotated.graph_iri).await {
                Ok(()) => return Ok(attempt),
                Err(e) if e.is_transient() && attempt < self.retry.max_attempts => {
                    let delay = self.retry.backoff(attempt);
                    warn!(
                        "Store attempt {}/{} for {} failed: {}. Retrying in {:?}",
                        attempt,
                        self.retry.max_attempts,
                        annotated.graph_iri.as_str(),
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    warn!(
                        "Giving up on {} after {} attempt(s): {}",
                        annotated.graph_iri.as_str(),
                        attempt,
                        e
                    );
                    return Err(e);
                }
            }
        }
    }
}
