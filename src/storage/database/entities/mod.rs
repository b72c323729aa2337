/// Product entity module
pub mod product;

pub use product::Entity as Product;
