//! Logging utilities
//!
//! Sets up the global `tracing` subscriber and provides small formatting
//! helpers for log messages.

use crate::config::LoggingConfig;
use crate::utils::error::{BulkError, Result};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Build the level filter, letting `RUST_LOG` win over the configured level
    pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }

        EnvFilter::try_new(config.level.trim()).map_err(|e| {
            BulkError::Config(format!("Invalid log level '{}': {}", config.level, e))
        })
    }

    /// Install the global subscriber. Logs go to stderr so stdout stays
    /// free for reports.
    pub fn init_logger(config: &LoggingConfig) -> Result<()> {
        let filter = Self::build_filter(config)?;
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr);

        let installed = if config.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };

        installed.map_err(|e| BulkError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    pub fn format_duration(duration: Duration) -> String {
        let total_ms = duration.as_millis();

        if total_ms < 1000 {
            format!("{}ms", total_ms)
        } else if total_ms < 60_000 {
            format!("{:.2}s", total_ms as f64 / 1000.0)
        } else {
            let minutes = total_ms / 60_000;
            let seconds = (total_ms % 60_000) as f64 / 1000.0;
            format!("{}m {:.2}s", minutes, seconds)
        }
    }
}
