//! Processor configuration

use super::types::{BatchCompletion, BatchProgress};
use crate::config::{ProcessorSettings, Validate};
use std::fmt;
use std::sync::Arc;

/// Callback invoked with cumulative progress
pub type ProgressCallback = Arc<dyn Fn(BatchProgress) + Send + Sync>;

/// Callback invoked when a batch finishes
pub type BatchCompleteCallback = Arc<dyn Fn(BatchCompletion) + Send + Sync>;

/// Configuration for a `BatchProcessor`
///
/// Sizes are checked when the processor is built, not here, so a config can
/// be assembled freely and rejected in one place.
#[derive(Clone)]
pub struct ProcessorConfig {
    /// Maximum number of items per batch (default: 100)
    pub batch_size: usize,
    /// Maximum number of batches in flight at once (default: 5)
    pub max_concurrent: usize,
    /// Progress hook
    pub on_progress: Option<ProgressCallback>,
    /// Batch completion hook
    pub on_batch_complete: Option<BatchCompleteCallback>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::from_settings(&ProcessorSettings::default())
    }
}

impl ProcessorConfig {
    /// Create a new config with default sizes and no callbacks
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config from file/env settings
    pub fn from_settings(settings: &ProcessorSettings) -> Self {
        Self {
            batch_size: settings.batch_size,
            max_concurrent: settings.max_concurrent,
            on_progress: None,
            on_batch_complete: None,
        }
    }

    /// Set batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the number of batches allowed to run concurrently
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    /// Set progress callback
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(BatchProgress) + Send + Sync + 'static,
    {
        self.on_progress = Some(Arc::new(callback));
        self
    }

    /// Set batch completion callback
    pub fn on_batch_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(BatchCompletion) + Send + Sync + 'static,
    {
        self.on_batch_complete = Some(Arc::new(callback));
        self
    }

    pub(crate) fn report_progress(&self, progress: BatchProgress) {
        if let Some(callback) = &self.on_progress {
            callback(progress);
        }
    }

    pub(crate) fn report_batch_complete(&self, completion: BatchCompletion) {
        if let Some(callback) = &self.on_batch_complete {
            callback(completion);
        }
    }
}

impl Validate for ProcessorConfig {
    fn validate(&self) -> Result<(), String> {
        if self.batch_size < 1 {
            return Err("batch_size must be at least 1".to_string());
        }
        if self.max_concurrent < 1 {
            return Err("max_concurrent must be at least 1".to_string());
        }
        Ok(())
    }
}

impl fmt::Debug for ProcessorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorConfig")
            .field("batch_size", &self.batch_size)
            .field("max_concurrent", &self.max_concurrent)
            .field("on_progress", &self.on_progress.is_some())
            .field("on_batch_complete", &self.on_batch_complete.is_some())
            .finish()
    }
}
