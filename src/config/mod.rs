//! Configuration management
//!
//! Configuration is read from an optional YAML file, then overridden by
//! environment variables. The binary applies command-line flags last.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{BulkError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::debug;

/// Environment variable overriding `processor.batch_size`
pub const ENV_BATCH_SIZE: &str = "BULK_BATCH_SIZE";
/// Environment variable overriding `processor.max_concurrent`
pub const ENV_MAX_CONCURRENT: &str = "BULK_MAX_CONCURRENT";
/// Environment variable overriding `database.url`
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
/// Environment variable overriding `database.max_connections`
pub const ENV_DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
/// Environment variable overriding `logging.level`
pub const ENV_LOG_LEVEL: &str = "BULK_LOG_LEVEL";
/// Environment variable overriding `logging.json`
pub const ENV_LOG_JSON: &str = "BULK_LOG_JSON";

/// Main configuration struct
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Batch processor settings
    #[serde(default)]
    pub processor: ProcessorSettings,
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// The result is not validated; later layers may still replace values.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| BulkError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply environment variable overrides
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_BATCH_SIZE) {
            self.processor.batch_size = parse_var(ENV_BATCH_SIZE, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_CONCURRENT) {
            self.processor.max_concurrent = parse_var(ENV_MAX_CONCURRENT, &value)?;
        }
        if let Some(value) = lookup(ENV_DATABASE_URL) {
            self.database.url = value;
        }
        if let Some(value) = lookup(ENV_DATABASE_MAX_CONNECTIONS) {
            self.database.max_connections = parse_var(ENV_DATABASE_MAX_CONNECTIONS, &value)?;
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = value;
        }
        if let Some(value) = lookup(ENV_LOG_JSON) {
            self.logging.json = parse_flag(ENV_LOG_JSON, &value)?;
        }
        Ok(())
    }

    /// Validate the fully layered configuration
    pub fn finish(self) -> Result<Self> {
        self.validate().map_err(BulkError::Config)?;
        Ok(self)
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| BulkError::Config(format!("Invalid {}: {}", key, e)))
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(BulkError::Config(format!(
            "Invalid {}: expected true/false, got '{}'",
            key, other
        ))),
    }
}
