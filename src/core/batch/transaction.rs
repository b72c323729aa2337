//! Transaction seam for the transactional batch path

use async_trait::async_trait;
use futures::future::BoxFuture;

/// Begins, commits and rolls back transactions for batch runs
///
/// A transaction handle is owned by exactly one batch. `commit` and
/// `rollback` consume it.
#[async_trait]
pub trait TransactionManager: Send + Sync {
    /// Transaction handle passed to the batch operation
    type Transaction: Send + Sync;
    /// Error raised by the manager and by batch operations
    type Error: std::fmt::Display + Send + Sync;

    /// Start a new transaction
    async fn begin(&self) -> Result<Self::Transaction, Self::Error>;

    /// Commit a transaction
    async fn commit(&self, tx: Self::Transaction) -> Result<(), Self::Error>;

    /// Roll back a transaction
    async fn rollback(&self, tx: Self::Transaction) -> Result<(), Self::Error>;
}

/// Future returned by a transactional batch operation, borrowing the batch
/// and the transaction
pub type TransactionalFuture<'a, E> = BoxFuture<'a, Result<(), E>>;
