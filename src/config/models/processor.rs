//! Batch processor settings

use super::*;
use serde::{Deserialize, Serialize};

/// Batch sizing settings loaded from file or environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorSettings {
    /// Maximum number of items per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Maximum number of batches running at once
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for ProcessorSettings {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            max_concurrent: default_max_concurrent(),
        }
    }
}
