//! Store client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Write protocol used against the backend
///
/// Both send the whole graph in one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StoreProtocol {
    /// SPARQL 1.1 Update: `INSERT DATA { GRAPH <g> { ... } }`
    #[default]
    SparqlUpdate,
    /// SPARQL 1.1 Graph Store HTTP Protocol: N-Triples POSTed to `?graph=<g>`
    GraphStore,
}

/// Configuration for [`crate::SparqlStore`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend base URL (e.g., "http://localhost:8890")
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Path of the query endpoint, reported to clients for browsing
    #[serde(default = "default_query_path")]
    pub query_path: String,

    /// Path of the SPARQL Update endpoint
    #[serde(default = "default_update_path")]
    pub update_path: String,

    /// Path of the Graph Store endpoint
    #[serde(default = "default_graph_store_path")]
    pub graph_store_path: String,

    /// Which write protocol to use
    #[serde(default)]
    pub protocol: StoreProtocol,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// HTTP basic auth user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// HTTP basic auth password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

fn default_endpoint() -> String {
    "http://localhost:8890".to_string()
}

fn default_query_path() -> String {
    "/sparql".to_string()
}

fn default_update_path() -> String {
    "/sparql-auth".to_string()
}

fn default_graph_store_path() -> String {
    "/sparql-graph-crud-auth".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            query_path: default_query_path(),
            update_path: default_update_path(),
            graph_store_path: default_graph_store_path(),
            protocol: StoreProtocol::default(),
            timeout_secs: default_timeout_secs(),
            username: None,
            password: None,
        }
    }
}

impl StoreConfig {
    /// Create a configuration for the given endpoint with default paths
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the query endpoint
    pub fn query_url(&self) -> String {
        self.join(&self.query_path)
    }

    /// Full URL of the SPARQL Update endpoint
    pub fn update_url(&self) -> String {
        self.join(&self.update_path)
    }

    /// Full URL of the Graph Store endpoint (without the `graph` parameter)
    pub fn graph_store_url(&self) -> String {
        self.join(&self.graph_store_path)
    }

    fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(format!(
                "endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            ));
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.password.is_some() && self.username.is_none() {
            return Err("password is set but username is missing".to_string());
        }
        Ok(())
    }
}
