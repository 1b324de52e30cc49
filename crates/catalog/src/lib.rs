//! Product catalog domain module.
//!
//! The catalog is a read-only snapshot fetched once from the catalog provider.
//! This crate holds the product model, category filtering/grouping and the
//! provider boundary.

pub mod catalog;
pub mod category;
pub mod error;
pub mod product;
pub mod provider;

pub use catalog::Catalog;
pub use category::ProductCategory;
pub use error::CatalogError;
pub use product::{Product, ProductVariant};
pub use provider::{load_catalog, CatalogProvider, StaticCatalog, SupabaseCatalog};
