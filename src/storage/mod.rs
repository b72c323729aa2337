//! Storage layer
//!
//! Relational storage through SeaORM. The batch processor never touches the
//! database itself; callers reach it from inside their operations.

pub mod database;

pub use database::{Database, SeaOrmTransactionManager};
