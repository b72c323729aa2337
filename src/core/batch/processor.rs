//! Batch processor implementation

use super::config::ProcessorConfig;
use super::partition::{Batch, partition, waves};
use super::transaction::{TransactionManager, TransactionalFuture};
use super::types::*;
use crate::config::Validate;
use crate::utils::error::{BulkError, Result};
use futures::future::join_all;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Runs work items in fixed-size batches
///
/// The processor keeps no state between runs; the same instance can be
/// reused for any number of sequential `process` calls.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    config: ProcessorConfig,
}

impl BatchProcessor {
    /// Create a new batch processor, rejecting zero sizes
    pub fn new(config: ProcessorConfig) -> Result<Self> {
        config.validate().map_err(BulkError::Config)?;
        Ok(Self { config })
    }

    /// Get current configuration
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Apply `operation` to every item
    ///
    /// Items are split into batches of `batch_size`. Up to `max_concurrent`
    /// batches form a wave and run concurrently; waves run one after the
    /// other. Inside a batch items are processed in order, and a failing item
    /// never stops its siblings. Each item is attempted exactly once. The value
    /// returned by `operation` on success is discarded.
    ///
    /// # Example
    /// ```rust,no_run
    /// use bulk_ops::core::batch::{BatchProcessor, ProcessorConfig};
    ///
    /// # async fn run() -> bulk_ops::Result<()> {
    /// let processor = BatchProcessor::new(ProcessorConfig::new().with_batch_size(2))?;
    /// let result = processor
    ///     .process(vec![1, 2, 3, 4, 5], |n| async move {
    ///         if n % 2 == 0 { Err(format!("{} is even", n)) } else { Ok(()) }
    ///     })
    ///     .await;
    /// assert_eq!(result.total_errors, 2);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn process<T, R, E, F, Fut>(
        &self,
        items: impl IntoIterator<Item = T>,
        operation: F,
    ) -> BatchResult<T, E>
    where
        T: Clone + Send,
        E: Send,
        F: Fn(T) -> Fut + Send + Sync,
        Fut: Future<Output = std::result::Result<R, E>> + Send,
    {
        let started = Instant::now();
        let items: Vec<T> = items.into_iter().collect();
        let total = items.len();
        let mut result = BatchResult::with_capacity(total);

        if total == 0 {
            debug!("No items to process");
            return result;
        }

        let run_id = Uuid::new_v4();
        let batches = partition(items, self.config.batch_size);
        result.batches = batches.len();

        info!(
            %run_id,
            total,
            batches = result.batches,
            batch_size = self.config.batch_size,
            max_concurrent = self.config.max_concurrent,
            "Starting batch run"
        );

        let counters = ProgressCounters::new(total);

        for (index, wave) in waves(batches, self.config.max_concurrent)
            .into_iter()
            .enumerate()
        {
            debug!(%run_id, wave = index + 1, batches = wave.len(), "Starting wave");

            let outcomes = join_all(
                wave.into_iter()
                    .map(|batch| self.run_batch(run_id, batch, &operation, &counters)),
            )
            .await;

            // Batches of a wave only touch their own buffers; merge them here.
            for batch_outcomes in outcomes {
                result.extend(batch_outcomes);
            }
        }

        result.elapsed = started.elapsed();
        info!(
            %run_id,
            processed = result.total_processed,
            errors = result.total_errors,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "Batch run finished"
        );

        result
    }

    /// Apply `operation` to every batch inside its own transaction
    ///
    /// Batches run strictly one after another. A batch whose operation
    /// succeeds is committed and all of its items succeed. A batch whose
    /// operation fails is rolled back exactly once and all of its items fail
    /// with the same shared error. A failed batch never stops the run.
    ///
    /// A failing `begin` or `commit` fails the batch with that error. If the
    /// rollback itself fails, the batch keeps the operation's error and the
    /// rollback error is logged.
    ///
    /// # Example
    /// ```rust,ignore
    /// let result = processor
    ///     .process_with_transaction(records, &manager, |batch, tx| {
    ///         Box::pin(async move { insert_all(tx, batch).await })
    ///     })
    ///     .await;
    /// ```
    pub async fn process_with_transaction<T, M, F>(
        &self,
        items: impl IntoIterator<Item = T>,
        manager: &M,
        operation: F,
    ) -> BatchResult<T, Arc<M::Error>>
    where
        T: Send + Sync,
        M: TransactionManager,
        F: for<'a> Fn(&'a [T], &'a M::Transaction) -> TransactionalFuture<'a, M::Error>
            + Send
            + Sync,
    {
        let started = Instant::now();
        let items: Vec<T> = items.into_iter().collect();
        let total = items.len();
        let mut result = BatchResult::with_capacity(total);

        if total == 0 {
            debug!("No items to process");
            return result;
        }

        let run_id = Uuid::new_v4();
        let batches = partition(items, self.config.batch_size);
        result.batches = batches.len();

        info!(
            %run_id,
            total,
            batches = result.batches,
            batch_size = self.config.batch_size,
            "Starting transactional batch run"
        );

        let counters = ProgressCounters::new(total);

        for Batch { number, items } in batches {
            let size = items.len();
            let outcome = Self::run_transaction(run_id, number, &items, manager, &operation).await;

            let failed = match outcome {
                Ok(()) => {
                    debug!(%run_id, batch = number, size, "Batch committed");
                    result.extend(items.into_iter().map(Outcome::Success));
                    0
                }
                Err(err) => {
                    warn!(%run_id, batch = number, size, error = %err, "Batch rolled back");
                    let err = Arc::new(err);
                    result.extend(
                        items
                            .into_iter()
                            .map(|item| Outcome::Failure(item, Arc::clone(&err))),
                    );
                    size
                }
            };

            self.config.report_progress(counters.record(size, failed));
            self.config.report_batch_complete(BatchCompletion {
                batch_number: number,
                succeeded: size - failed,
                failed,
            });
        }

        result.elapsed = started.elapsed();
        info!(
            %run_id,
            processed = result.total_processed,
            errors = result.total_errors,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "Transactional batch run finished"
        );

        result
    }

    async fn run_batch<T, R, E, F, Fut>(
        &self,
        run_id: Uuid,
        batch: Batch<T>,
        operation: &F,
        counters: &ProgressCounters,
    ) -> Vec<Outcome<T, E>>
    where
        T: Clone,
        F: Fn(T) -> Fut,
        Fut: Future<Output = std::result::Result<R, E>>,
    {
        let Batch { number, items } = batch;
        debug!(%run_id, batch = number, size = items.len(), "Processing batch");

        let mut outcomes = Vec::with_capacity(items.len());
        let mut failed = 0;

        for item in items {
            let outcome = operation(item.clone()).await;
            let outcome = Outcome::from_result(item, outcome);
            let item_failed = !outcome.is_success();
            if item_failed {
                failed += 1;
            }
            outcomes.push(outcome);

            self.config
                .report_progress(counters.record(1, usize::from(item_failed)));
        }

        let succeeded = outcomes.len() - failed;
        if failed > 0 {
            warn!(%run_id, batch = number, succeeded, failed, "Batch finished with failures");
        } else {
            debug!(%run_id, batch = number, succeeded, "Batch finished");
        }

        self.config.report_batch_complete(BatchCompletion {
            batch_number: number,
            succeeded,
            failed,
        });

        outcomes
    }

    async fn run_transaction<T, M, F>(
        run_id: Uuid,
        number: usize,
        items: &[T],
        manager: &M,
        operation: &F,
    ) -> std::result::Result<(), M::Error>
    where
        M: TransactionManager,
        F: for<'a> Fn(&'a [T], &'a M::Transaction) -> TransactionalFuture<'a, M::Error>,
    {
        let tx = manager.begin().await?;
        let outcome = operation(items, &tx).await;

        match outcome {
            Ok(()) => manager.commit(tx).await,
            Err(err) => {
                if let Err(rollback_err) = manager.rollback(tx).await {
                    error!(
                        %run_id,
                        batch = number,
                        error = %rollback_err,
                        "Failed to roll back batch transaction"
                    );
                }
                Err(err)
            }
        }
    }
}

/// Cumulative counters shared by the batches of a run
#[derive(Debug)]
struct ProgressCounters {
    total: usize,
    processed: AtomicUsize,
    errors: AtomicUsize,
}

impl ProgressCounters {
    fn new(total: usize) -> Self {
        Self {
            total,
            processed: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
        }
    }

    fn record(&self, processed: usize, errors: usize) -> BatchProgress {
        let errors = self.errors.fetch_add(errors, Ordering::SeqCst) + errors;
        let processed = self.processed.fetch_add(processed, Ordering::SeqCst) + processed;
        BatchProgress {
            processed,
            total: self.total,
            errors,
        }
    }
}
