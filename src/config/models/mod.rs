//! Configuration data models
//!
//! Every section deserializes with defaults so a config file only needs the
//! values it overrides.

pub mod logging;
pub mod processor;
pub mod storage;

pub use logging::*;
pub use processor::*;
pub use storage::*;

/// Default number of items per batch
pub fn default_batch_size() -> usize {
    100
}

/// Default number of batches in flight
pub fn default_max_concurrent() -> usize {
    5
}

/// Default database URL
pub fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

/// Default max database connections
pub fn default_max_connections() -> u32 {
    5
}

/// Default connection timeout (seconds)
pub fn default_connection_timeout() -> u64 {
    30
}

/// Default log level directive
pub fn default_log_level() -> String {
    "info".to_string()
}
