//! SeaORM-backed transaction manager

use crate::core::batch::TransactionManager;
use crate::utils::error::BulkError;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::debug;

/// Opens one database transaction per batch
///
/// Dropping an uncommitted `DatabaseTransaction` rolls it back, so a failed
/// commit leaves nothing behind.
#[derive(Debug, Clone)]
pub struct SeaOrmTransactionManager {
    conn: DatabaseConnection,
}

impl SeaOrmTransactionManager {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl TransactionManager for SeaOrmTransactionManager {
    type Transaction = DatabaseTransaction;
    type Error = BulkError;

    async fn begin(&self) -> Result<DatabaseTransaction, BulkError> {
        debug!("Beginning batch transaction");
        Ok(self.conn.begin().await?)
    }

    async fn commit(&self, tx: DatabaseTransaction) -> Result<(), BulkError> {
        debug!("Committing batch transaction");
        Ok(tx.commit().await?)
    }

    async fn rollback(&self, tx: DatabaseTransaction) -> Result<(), BulkError> {
        debug!("Rolling back batch transaction");
        Ok(tx.rollback().await?)
    }
}
