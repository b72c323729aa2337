//! Product persistence helpers
//!
//! Functions take any `ConnectionTrait` so they run the same way on a plain
//! connection or inside a batch transaction.

use super::entities::{Product, product};
use crate::utils::error::Result;
use sea_orm::{ActiveValue::Set, ConnectionTrait, EntityTrait, PaginatorTrait};
use tracing::debug;

/// Fields of a product row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub stock: i32,
}

impl From<NewProduct> for product::ActiveModel {
    fn from(value: NewProduct) -> Self {
        Self {
            sku: Set(value.sku),
            name: Set(value.name),
            unit_price_cents: Set(value.unit_price_cents),
            stock: Set(value.stock),
        }
    }
}

/// Insert one product
pub async fn insert_product<C>(conn: &C, product: NewProduct) -> Result<()>
where
    C: ConnectionTrait,
{
    debug!("Inserting product: {}", product.sku);
    Product::insert(product::ActiveModel::from(product))
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

/// Insert products with a single multi-row statement
pub async fn insert_products<C>(conn: &C, products: Vec<NewProduct>) -> Result<u64>
where
    C: ConnectionTrait,
{
    if products.is_empty() {
        return Ok(0);
    }

    debug!("Inserting {} products", products.len());
    let rows = Product::insert_many(products.into_iter().map(product::ActiveModel::from))
        .exec_without_returning(conn)
        .await?;
    Ok(rows)
}

/// Find a product by SKU
pub async fn find_product<C>(conn: &C, sku: &str) -> Result<Option<product::Model>>
where
    C: ConnectionTrait,
{
    Ok(Product::find_by_id(sku.to_string()).one(conn).await?)
}

/// Count all products
pub async fn count_products<C>(conn: &C) -> Result<u64>
where
    C: ConnectionTrait,
{
    Ok(Product::find().count(conn).await?)
}
