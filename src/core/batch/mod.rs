//! Batch processing for bulk operations
//!
//! This module splits work items into fixed-size batches and runs them
//! against a caller-supplied operation, either with bounded concurrency or
//! one transaction per batch.

mod config;
mod partition;
mod processor;
mod transaction;
mod types;


// Re-export all public types
pub use config::{BatchCompleteCallback, ProcessorConfig, ProgressCallback};
pub use partition::{Batch, partition, waves};
pub use processor::BatchProcessor;
pub use transaction::{TransactionManager, TransactionalFuture};
pub use types::{
    BatchCompletion, BatchProgress, BatchResult, BatchSummary, Outcome,
};
