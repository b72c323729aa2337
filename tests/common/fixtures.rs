//! Product record factories

use bulk_ops::import::ProductRecord;

pub struct RecordFactory;

impl RecordFactory {
    /// A valid record whose SKU is derived from `n`
    pub fn create(n: usize) -> ProductRecord {
        ProductRecord {
            sku: format!("SKU-{:04}", n),
            name: format!("Product {}", n),
            unit_price_cents: 100 + n as i64,
            stock: 10,
        }
    }

    /// `count` valid records numbered from 1
    pub fn many(count: usize) -> Vec<ProductRecord> {
        (1..=count).map(Self::create).collect()
    }

    /// A record that fails validation
    pub fn invalid(n: usize) -> ProductRecord {
        let mut record = Self::create(n);
        record.unit_price_cents = -1;
        record
    }
}
