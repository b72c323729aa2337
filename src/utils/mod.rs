//! Utility modules
//!
//! - **error**: Error type and result alias
//! - **logging**: Subscriber setup and log formatting helpers

pub mod error; // Error handling
pub mod logging; // Logging

pub use error::{BulkError, Result};
pub use logging::LoggingUtils;
