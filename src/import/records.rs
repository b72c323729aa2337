//! Product record parsing and validation

use crate::storage::database::products::NewProduct;
use crate::utils::error::{BulkError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Longest SKU the `products` table accepts
pub const MAX_SKU_LEN: usize = 64;

/// A product as it appears in an import file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub sku: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub stock: i32,
}

impl ProductRecord {
    pub fn validate(&self) -> Result<()> {
        let sku = self.sku.trim();
        if sku.is_empty() {
            return Err(BulkError::validation("sku cannot be empty"));
        }
        if sku.len() > MAX_SKU_LEN {
            return Err(BulkError::validation(format!(
                "sku '{}' is longer than {} characters",
                sku, MAX_SKU_LEN
            )));
        }
        if self.name.trim().is_empty() {
            return Err(BulkError::validation(format!("product '{}' has no name", sku)));
        }
        if self.unit_price_cents < 0 {
            return Err(BulkError::validation(format!(
                "product '{}' has a negative price",
                sku
            )));
        }
        if self.stock < 0 {
            return Err(BulkError::validation(format!(
                "product '{}' has negative stock",
                sku
            )));
        }
        Ok(())
    }

    /// Row values with surrounding whitespace removed
    pub fn to_new_product(&self) -> NewProduct {
        NewProduct {
            sku: self.sku.trim().to_string(),
            name: self.name.trim().to_string(),
            unit_price_cents: self.unit_price_cents,
            stock: self.stock,
        }
    }
}

/// Parse a JSON array of records, or JSON Lines with one record per line
pub fn parse_records(content: &str) -> Result<Vec<ProductRecord>> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| {
                BulkError::validation(format!("line {}: {}", index + 1, e))
            })
        })
        .collect()
}

/// Read and parse an import file
pub async fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<ProductRecord>> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    let records = parse_records(&content)?;
    debug!("Loaded {} records from {:?}", records.len(), path.as_ref());
    Ok(records)
}
