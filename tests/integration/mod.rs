//! Integration tests for bulk-ops
//!
//! These tests run batches against a real in-memory database.

pub mod config_tests;
pub mod import_tests;
pub mod transaction_tests;
