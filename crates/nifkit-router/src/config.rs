//! Configuration file parsing for the service.
//!
//! Loads the bind address, locator bases, store connection settings, retry
//! policy and annotator limits from a TOML file. Every section is optional
//! and falls back to its defaults.

use crate::retry::RetryPolicy;
use nifkit_annotator::AnnotatorConfig;
use nifkit_store::StoreConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Service configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is out of range or malformed
    #[error("Invalid configuration [{section}]: {message}")]
    Invalid {
        /// Section the value belongs to
        section: &'static str,
        /// What is wrong with it
        message: String,
    },
}

/// Service configuration loaded from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 5000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Base URL for browse links; defaults to the resource base
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browse_base: Option<String>,

    /// Number of sample resources reported per processed document
    #[serde(default = "default_sample_resource_limit")]
    pub sample_resource_limit: usize,

    /// Annotation settings
    #[serde(default)]
    pub annotator: AnnotatorConfig,

    /// Triple store connection
    #[serde(default)]
    pub store: StoreConfig,

    /// Store retry policy
    #[serde(default)]
    pub retry: RetryPolicy,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    5000
}

fn default_sample_resource_limit() -> usize {
    3
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            browse_base: None,
            sample_resource_limit: default_sample_resource_limit(),
            annotator: AnnotatorConfig::default(),
            store: StoreConfig::default(),
            retry: RetryPolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |section, message| ConfigError::Invalid { section, message };

        if self.bind_address.trim().is_empty() {
            return Err(invalid("server", "bind_address is empty".to_string()));
        }
        self.annotator
            .validate()
            .map_err(|m| invalid("annotator", m))?;
        self.store.validate().map_err(|m| invalid("store", m))?;
        self.retry.validate().map_err(|m| invalid("retry", m))?;

        Ok(())
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }

    /// Base URL used for browse links
    pub fn browse_base(&self) -> &str {
        self.browse_base
            .as_deref()
            .unwrap_or(&self.annotator.resource_base)
            .trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nifkit_store::StoreProtocol;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert_eq!(config.sample_resource_limit, 3);
        assert_eq!(config.browse_base(), "http://localhost:8080");
        assert_eq!(config.retry.max_attempts, 1);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = ServerConfig::from_toml("").unwrap();
        assert_eq!(config.bind_port, 5000);
        assert_eq!(config.store.endpoint, "http://localhost:8890");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            browse_base = "http://lod.example.org/"
            sample_resource_limit = 5

            [annotator]
            resource_base = "http://nif.example.org"
            max_text_length = 5000

            [store]
            endpoint = "http://virtuoso:8890"
            protocol = "graph-store"
            timeout_secs = 30
            username = "dba"
            password = "dba"

            [retry]
            max_attempts = 4
            initial_backoff_ms = 250
            backoff_multiplier = 3
        "#;

        let config = ServerConfig::from_toml(toml).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.browse_base(), "http://lod.example.org");
        assert_eq!(config.sample_resource_limit, 5);
        assert_eq!(config.annotator.resource_base, "http://nif.example.org");
        assert_eq!(config.annotator.max_text_length, 5000);
        assert_eq!(config.store.protocol, StoreProtocol::GraphStore);
        assert_eq!(config.store.username.as_deref(), Some("dba"));
        assert_eq!(config.retry.max_attempts, 4);
        assert_eq!(config.retry.backoff_multiplier, 3);
    }

    #[test]
    fn test_invalid_section_is_named() {
        let toml = r#"
            [store]
            endpoint = "virtuoso:8890"
        "#;

        match ServerConfig::from_toml(toml) {
            Err(ConfigError::Invalid { section, .. }) => assert_eq!(section, "store"),
            other => panic!("expected invalid store section, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_toml() {
        let result = ServerConfig::from_toml("bind_port = \"not a number\"");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}
