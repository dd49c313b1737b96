//! Configuration for the Annotator

use nifkit_domain::Locators;
use serde::{Deserialize, Serialize};

/// Configuration for the Annotator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatorConfig {
    /// Base address for resource and graph locators
    #[serde(default = "default_resource_base")]
    pub resource_base: String,

    /// Maximum input text length (characters, after trimming)
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
}

fn default_resource_base() -> String {
    "http://localhost:8080".to_string()
}

fn default_max_text_length() -> usize {
    1_000_000
}

impl AnnotatorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        Locators::new(self.resource_base.as_str())
            .map_err(|e| format!("resource_base is invalid: {}", e))?;
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            resource_base: default_resource_base(),
            max_text_length: default_max_text_length(),
        }
    }
}
