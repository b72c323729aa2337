//! Core functionality
//!
//! This module contains the batch processing engine.

pub mod batch;

pub use batch::{
    BatchCompletion, BatchProcessor, BatchProgress, BatchResult, BatchSummary, Outcome,
    ProcessorConfig, TransactionManager,
};
