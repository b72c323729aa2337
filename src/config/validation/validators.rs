//! Validators for configuration sections

use super::trait_def::Validate;
use crate::config::Config;
use crate::config::models::*;
use tracing::debug;

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating configuration");

        self.processor.validate()?;
        self.database.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Validate for ProcessorSettings {
    fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 {
            return Err("processor.batch_size must be at least 1".to_string());
        }
        if self.max_concurrent == 0 {
            return Err("processor.max_concurrent must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("database.url cannot be empty".to_string());
        }
        if self.max_connections == 0 {
            return Err("database.max_connections must be greater than 0".to_string());
        }
        if self.connection_timeout == 0 {
            return Err("database.connection_timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("logging.level cannot be empty".to_string());
        }
        Ok(())
    }
}
