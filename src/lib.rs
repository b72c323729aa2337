//! # bulk-ops
//!
//! Batched bulk operations for back-office imports and syncs.
//!
//! ## Features
//!
//! - **Fixed-size batches**: deterministic, order-preserving partitioning
//! - **Bounded concurrency**: up to `max_concurrent` batches per wave
//! - **Per-item outcomes**: failures are captured, never propagated
//! - **Transactional batches**: one transaction per batch, all-or-nothing
//! - **Product import**: SeaORM-backed catalog importer and `bulk-import` CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bulk_ops::{BatchProcessor, ProcessorConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let processor = BatchProcessor::new(
//!         ProcessorConfig::new()
//!             .with_batch_size(50)
//!             .with_max_concurrent(4)
//!             .on_progress(|p| println!("{}/{} ({} errors)", p.processed, p.total, p.errors)),
//!     )?;
//!
//!     let result = processor
//!         .process(1..=1000u32, |id| async move {
//!             if id % 100 == 0 { Err(format!("order {} is locked", id)) } else { Ok(()) }
//!         })
//!         .await;
//!
//!     println!("{} synced, {} failed", result.succeeded.len(), result.failed.len());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod import;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use crate::core::batch::{
    Batch, BatchCompletion, BatchProcessor, BatchProgress, BatchResult, BatchSummary, Outcome,
    ProcessorConfig, TransactionManager, TransactionalFuture,
};
pub use utils::error::{BulkError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
