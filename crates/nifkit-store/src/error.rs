//! Error types for the store client

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while storing a graph
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backend answered with a non-success status
    #[error("Backend returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// Connection to the backend failed
    #[error("Connection error: {0}")]
    Connection(String),

    /// Backend did not answer within the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Any other transport failure
    #[error("Request error: {0}")]
    Request(String),

    /// Invalid store configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Classify a transport error
    pub(crate) fn from_transport(e: reqwest::Error, timeout: Duration) -> Self {
        if e.is_timeout() {
            StoreError::Timeout(timeout)
        } else if e.is_connect() {
            StoreError::Connection(e.to_string())
        } else {
            StoreError::Request(e.to_string())
        }
    }

    /// Whether re-sending the same request could succeed
    ///
    /// Server errors, timeouts and refused connections are transient;
    /// client errors and bad configuration are not.
    pub fn is_transient(&self) -> bool {
        match self {
            StoreError::Status { status, .. } => *status >= 500,
            StoreError::Connection(_) | StoreError::Timeout(_) => true,
            StoreError::Request(_) | StoreError::Config(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        let server = StoreError::Status {
            status: 503,
            body: String::new(),
        };
        let client = StoreError::Status {
            status: 400,
            body: String::new(),
        };
        assert!(server.is_transient());
        assert!(!client.is_transient());
        assert!(StoreError::Timeout(Duration::from_secs(1)).is_transient());
        assert!(StoreError::Connection("refused".to_string()).is_transient());
        assert!(!StoreError::Config("bad".to_string()).is_transient());
    }
}
