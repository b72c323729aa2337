//! Batch processing types and data structures

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-item result of a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// The operation completed for this item
    Success(T),
    /// The operation failed for this item
    Failure(T, E),
}

impl<T, E> Outcome<T, E> {
    /// Build an outcome from an item and the result of its operation
    pub fn from_result<R>(item: T, result: std::result::Result<R, E>) -> Self {
        match result {
            Ok(_) => Self::Success(item),
            Err(err) => Self::Failure(item, err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The item this outcome belongs to
    pub fn item(&self) -> &T {
        match self {
            Self::Success(item) | Self::Failure(item, _) => item,
        }
    }
}

/// Aggregate result of a batch run
///
/// Every input item lands in exactly one of `succeeded` or `failed`.
/// Under concurrent execution `succeeded` follows completion order, which is
/// not necessarily input order.
#[derive(Debug, Clone)]
pub struct BatchResult<T, E> {
    /// Items whose operation completed
    pub succeeded: Vec<T>,
    /// Items whose operation failed, paired with the captured error
    pub failed: Vec<(T, E)>,
    /// Number of items processed
    pub total_processed: usize,
    /// Number of failed items
    pub total_errors: usize,
    /// Number of batches the input was split into
    pub batches: usize,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl<T, E> BatchResult<T, E> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            succeeded: Vec::with_capacity(capacity),
            failed: Vec::new(),
            total_processed: 0,
            total_errors: 0,
            batches: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Record a single outcome
    pub fn record(&mut self, outcome: Outcome<T, E>) {
        self.total_processed += 1;
        match outcome {
            Outcome::Success(item) => self.succeeded.push(item),
            Outcome::Failure(item, err) => {
                self.total_errors += 1;
                self.failed.push((item, err));
            }
        }
    }

    /// True when no item failed
    pub fn is_complete_success(&self) -> bool {
        self.total_errors == 0
    }

    /// Serializable counts for reporting
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            total: self.total_processed,
            succeeded: self.succeeded.len(),
            failed: self.failed.len(),
            batches: self.batches,
            elapsed_ms: self.elapsed.as_millis() as u64,
        }
    }
}

impl<T, E> Extend<Outcome<T, E>> for BatchResult<T, E> {
    fn extend<I: IntoIterator<Item = Outcome<T, E>>>(&mut self, iter: I) {
        for outcome in iter {
            self.record(outcome);
        }
    }
}

impl<T, E> FromIterator<Outcome<T, E>> for BatchResult<T, E> {
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        let mut result = Self::with_capacity(0);
        result.extend(iter);
        result
    }
}

/// Counts of a finished batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Items processed
    pub total: usize,
    /// Items that succeeded
    pub succeeded: usize,
    /// Items that failed
    pub failed: usize,
    /// Batches run
    pub batches: usize,
    /// Elapsed wall-clock time in milliseconds
    pub elapsed_ms: u64,
}

/// Cumulative progress, reported after every item (or every batch in
/// transactional mode)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    /// Items processed so far
    pub processed: usize,
    /// Total number of input items
    pub total: usize,
    /// Items failed so far
    pub errors: usize,
}

/// Report for a single finished batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchCompletion {
    /// 1-based sequence number of the batch
    pub batch_number: usize,
    /// Items of the batch that succeeded
    pub succeeded: usize,
    /// Items of the batch that failed
    pub failed: usize,
}
