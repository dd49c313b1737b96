//! HTTP request handlers for the service.
//!
//! Implements document processing, health check and endpoint discovery
//! using axum.

use crate::config::{ConfigError, ServerConfig};
use crate::pipeline::{ProcessError, ProcessingOutcome, ProcessingPipeline};
use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use nifkit_annotator::DocumentRequest;
use nifkit_domain::Iri;
use nifkit_store::GraphStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Validate, annotate, store
    pub pipeline: Arc<ProcessingPipeline>,
    /// Public addresses reported to clients
    pub endpoints: Arc<Endpoints>,
    /// Largest accepted request body (bytes)
    pub body_limit: usize,
}

/// Room for the document name and JSON framing on top of the text itself
const REQUEST_OVERHEAD_BYTES: usize = 64 * 1024;

/// Request body limit that admits any text up to `max_text_length` chars
///
/// A char takes at most 4 bytes in UTF-8.
pub fn body_limit_for(max_text_length: usize) -> usize {
    max_text_length
        .saturating_mul(4)
        .saturating_add(REQUEST_OVERHEAD_BYTES)
}

impl AppState {
    /// Build the state for a configuration and a store backend
    pub fn from_config(config: &ServerConfig, store: Arc<dyn GraphStore>) -> Result<Self, ConfigError> {
        Ok(Self {
            pipeline: Arc::new(ProcessingPipeline::from_config(config, store)?),
            endpoints: Arc::new(Endpoints::from_config(config)),
            body_limit: body_limit_for(config.annotator.max_text_length),
        })
    }
}

/// Addresses clients use to look at stored graphs
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Base for browse links
    pub browse_base: String,
    /// Query endpoint of the store
    pub sparql_endpoint: String,
    /// Store base URL
    pub store_url: String,
}

impl Endpoints {
    /// Derive the endpoints from the service configuration
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            browse_base: config.browse_base().to_string(),
            sparql_endpoint: config.store.query_url(),
            store_url: config.store.endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// HTML `DESCRIBE` link for a resource or graph
    pub fn browse_url(&self, iri: &Iri) -> String {
        format!(
            "{}/sparql?default-graph-uri=&query=DESCRIBE+%3C{}%3E&format=text%2Fhtml",
            self.browse_base,
            urlencoding::encode(iri.as_str())
        )
    }
}

/// A sample resource with its browse link
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleResource {
    /// Resource locator
    pub uri: String,
    /// HTML view of the resource
    pub browse_url: String,
}

/// Successful processing response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    /// Always true
    pub success: bool,
    /// Human-readable summary
    pub message: String,
    /// Named graph id
    pub graph_id: String,
    /// Named graph locator
    pub graph_uri: String,
    /// HTML view of the named graph
    pub graph_browse_url: String,
    /// First resources of the graph
    pub sample_resources: Vec<SampleResource>,
    /// Number of statements stored
    pub triple_count: usize,
    /// Query endpoint holding the graph
    pub sparql_endpoint: String,
}

impl ProcessResponse {
    fn new(outcome: &ProcessingOutcome, endpoints: &Endpoints) -> Self {
        Self {
            success: true,
            message: "Document processed successfully".to_string(),
            graph_id: outcome.graph_id.to_string(),
            graph_uri: outcome.graph_iri.as_str().to_string(),
            graph_browse_url: endpoints.browse_url(&outcome.graph_iri),
            sample_resources: outcome
                .sample_resources
                .iter()
                .map(|iri| SampleResource {
                    uri: iri.as_str().to_string(),
                    browse_url: endpoints.browse_url(iri),
                })
                .collect(),
            triple_count: outcome.triple_count,
            sparql_endpoint: endpoints.sparql_endpoint.clone(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Server time (RFC 3339)
    pub timestamp: String,
}

/// Store discovery response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparqlInfoResponse {
    /// Query endpoint of the store
    pub sparql_endpoint: String,
    /// Store base URL
    pub store_url: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Body is not a JSON processing request
    BadRequest(String),
    /// Body exceeds the configured limit
    PayloadTooLarge(String),
    /// Pipeline failure
    Process(ProcessError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            AppError::Process(e) => {
                let status = match &e {
                    ProcessError::Validation(_) => StatusCode::BAD_REQUEST,
                    ProcessError::Consistency(_) => StatusCode::INTERNAL_SERVER_ERROR,
                    ProcessError::Store(_) => StatusCode::BAD_GATEWAY,
                };
                if status.is_server_error() {
                    error!("Processing failed: {}", e);
                }
                (status, e.to_string())
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<ProcessError> for AppError {
    fn from(e: ProcessError) -> Self {
        AppError::Process(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(format!("Request body too large: {}", e.body_text()))
        } else {
            AppError::BadRequest(format!("No data provided: {}", e.body_text()))
        }
    }
}

/// POST /process - Turn a document into a stored NIF graph
async fn process_document(
    State(state): State<AppState>,
    payload: Result<Json<DocumentRequest>, JsonRejection>,
) -> Result<Json<ProcessResponse>, AppError> {
    let Json(request) = payload?;

    let outcome = state.pipeline.process(request).await?;

    Ok(Json(ProcessResponse::new(&outcome, &state.endpoints)))
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /sparql - Where stored graphs can be queried
async fn sparql_endpoint(State(state): State<AppState>) -> Json<SparqlInfoResponse> {
    Json(SparqlInfoResponse {
        sparql_endpoint: state.endpoints.sparql_endpoint.clone(),
        store_url: state.endpoints.store_url.clone(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    let body_limit = state.body_limit;

    AxumRouter::new()
        .route("/process", post(process_document))
        .route("/health", get(health_check))
        .route("/sparql", get(sparql_endpoint))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
