use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalog product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Stock keeping unit, unique per catalog
    #[sea_orm(primary_key, auto_increment = false)]
    pub sku: String,

    /// Display name
    pub name: String,

    /// Unit price in minor currency units
    pub unit_price_cents: i64,

    /// Units on hand
    pub stock: i32,
}

/// Product entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
