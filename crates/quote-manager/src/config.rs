//! Configuration loading for the quote manager
//!
//! Supports JSON configuration files for:
//! - The price policy applied to incoming quotes
//! - Seed quotes loaded into the books at startup

use quoter_core::Quote;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::validator::{PricePolicy, QuoteValidator};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid seed quote #{position}: {reason}")]
    InvalidSeedQuote { position: usize, reason: String },
}

/// Root configuration for a quote manager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteManagerConfig {
    /// Manager name, used in logs
    #[serde(default = "default_name")]
    pub name: String,

    /// Which prices incoming quotes may carry
    #[serde(default)]
    pub price_policy: PricePolicy,

    /// Quotes loaded into the books at startup
    #[serde(default)]
    pub seed_quotes: Vec<Quote>,
}

fn default_name() -> String {
    "quoter".to_string()
}

impl Default for QuoteManagerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            price_policy: PricePolicy::default(),
            seed_quotes: Vec::new(),
        }
    }
}

impl QuoteManagerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every seed quote against the configured price policy
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (position, quote) in self.seed_quotes.iter().enumerate() {
            QuoteValidator::validate_quote(quote, self.price_policy).map_err(|e| {
                ConfigError::InvalidSeedQuote {
                    position,
                    reason: e.to_string(),
                }
            })?;
        }
        Ok(())
    }
}
