//! Product importer

use super::records::ProductRecord;
use crate::core::batch::{BatchProcessor, BatchResult, BatchSummary};
use crate::storage::database::Database;
use crate::storage::database::products::{insert_product, insert_products};
use crate::utils::error::BulkError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// How records are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// One transaction per batch; a bad record rejects its whole batch
    Atomic,
    /// Each record on its own; batches run concurrently
    Each,
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atomic => write!(f, "atomic"),
            Self::Each => write!(f, "each"),
        }
    }
}

/// A record that was not imported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportFailure {
    pub sku: String,
    pub error: String,
}

/// Outcome of an import run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub mode: ImportMode,
    pub started_at: DateTime<Utc>,
    pub summary: BatchSummary,
    pub failures: Vec<ImportFailure>,
}

impl ImportReport {
    pub fn from_result<E: fmt::Display>(
        mode: ImportMode,
        started_at: DateTime<Utc>,
        result: &BatchResult<ProductRecord, E>,
    ) -> Self {
        let failures = result
            .failed
            .iter()
            .map(|(record, err)| ImportFailure {
                sku: record.sku.clone(),
                error: err.to_string(),
            })
            .collect();

        Self {
            mode,
            started_at,
            summary: result.summary(),
            failures,
        }
    }

    /// True when every record was imported
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Writes product records through a `BatchProcessor`
pub struct ProductImporter {
    db: Database,
    processor: BatchProcessor,
}

impl ProductImporter {
    pub fn new(db: Database, processor: BatchProcessor) -> Self {
        Self { db, processor }
    }

    /// Import with one transaction per batch, validating every record of a
    /// batch before writing it with a single multi-row insert
    pub async fn import_atomic(
        &self,
        records: Vec<ProductRecord>,
    ) -> BatchResult<ProductRecord, Arc<BulkError>> {
        let manager = self.db.transaction_manager();

        self.processor
            .process_with_transaction(records, &manager, |batch, tx| {
                Box::pin(async move {
                    let mut products = Vec::with_capacity(batch.len());
                    for record in batch {
                        record.validate()?;
                        products.push(record.to_new_product());
                    }
                    insert_products(tx, products).await?;
                    Ok::<(), BulkError>(())
                })
            })
            .await
    }

    /// Import each record independently
    pub async fn import_each(
        &self,
        records: Vec<ProductRecord>,
    ) -> BatchResult<ProductRecord, BulkError> {
        let conn = self.db.connection().clone();

        self.processor
            .process(records, move |record: ProductRecord| {
                let conn = conn.clone();
                async move {
                    record.validate()?;
                    insert_product(&conn, record.to_new_product()).await
                }
            })
            .await
    }

    /// Import in the given mode and build a report
    pub async fn import(&self, records: Vec<ProductRecord>, mode: ImportMode) -> ImportReport {
        let started_at = Utc::now();
        info!("Importing {} records in {} mode", records.len(), mode);

        let report = match mode {
            ImportMode::Atomic => {
                ImportReport::from_result(mode, started_at, &self.import_atomic(records).await)
            }
            ImportMode::Each => {
                ImportReport::from_result(mode, started_at, &self.import_each(records).await)
            }
        };

        info!(
            "Import finished: {} imported, {} failed",
            report.summary.succeeded, report.summary.failed
        );
        report
    }
}
