//! Product catalog bulk import
//!
//! Loads product records from JSON and writes them to the database through
//! the batch processor, either one transaction per batch or item by item.

pub mod importer;
pub mod records;

pub use importer::{ImportFailure, ImportMode, ImportReport, ProductImporter};
pub use records::{ProductRecord, load_records, parse_records};
