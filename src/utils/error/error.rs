//! Error types for bulk operations
//!
//! Item-level failures produced by a caller's operation never surface here;
//! they are captured in a `BatchResult`. `BulkError` covers everything around
//! the processor: configuration, storage, input parsing and record validation.

use thiserror::Error;

/// Result type alias for bulk operations
pub type Result<T> = std::result::Result<T, BulkError>;

/// Main error type for bulk operations
#[derive(Error, Debug)]
pub enum BulkError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BulkError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the error comes from the storage backend
    pub fn is_database(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}
