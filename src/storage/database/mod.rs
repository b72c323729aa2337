//! Database storage implementation using SeaORM

/// Database entities module
pub mod entities;
/// Database migration module
pub mod migration;
/// Product persistence helpers
pub mod products;
/// SeaORM-backed transaction manager
pub mod transaction;

pub use transaction::SeaOrmTransactionManager;

use crate::config::DatabaseConfig;
use crate::utils::error::{BulkError, Result};
use migration::Migrator;
use sea_orm::{ConnectOptions, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{info, warn};

/// SeaORM database handle
#[derive(Debug, Clone)]
pub struct Database {
    conn: DatabaseConnection,
}

impl Database {
    /// Create a new database connection
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let mut opt = ConnectOptions::new(config.url.clone());

        // Every pooled connection to an in-memory SQLite URL opens its own
        // empty database.
        let max_connections = if config.is_in_memory() {
            1
        } else {
            config.max_connections
        };

        opt.max_connections(max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        let conn = sea_orm::Database::connect(opt)
            .await
            .map_err(BulkError::Database)?;

        info!("Database connection established");
        Ok(Self { conn })
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.conn, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            BulkError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Connect and migrate in one step
    pub async fn open(config: &DatabaseConfig) -> Result<Self> {
        let db = Self::connect(config).await?;
        db.migrate().await?;
        Ok(db)
    }

    /// Underlying SeaORM connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Transaction manager for transactional batch runs
    pub fn transaction_manager(&self) -> SeaOrmTransactionManager {
        SeaOrmTransactionManager::new(self.conn.clone())
    }
}
