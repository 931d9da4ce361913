//! Catalog domain module.
//!
//! Product records, the built-in page datasets and the filter/sort engine that
//! turns a dataset into the sequence a listing page shows. Everything here is
//! deterministic and side-effect free.

pub mod catalog;
pub mod datasets;
pub mod filter;
pub mod product;

pub use catalog::{Catalog, CatalogError};
pub use filter::{CategoryFilter, SortKey, filter_and_sort};
pub use product::{DEFAULT_SIZES, Product, ProductId, ProductRecord};
