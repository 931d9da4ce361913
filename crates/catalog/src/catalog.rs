//! A page-scoped collection of products.

use std::collections::HashSet;

use thiserror::Error;

use storefront_core::{DomainError, Entity};

use crate::product::{Product, ProductId, ProductRecord};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog document: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Products for one listing page, in dataset order.
///
/// Ids are unique within a catalog; that is checked on construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn from_products(products: Vec<Product>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(*product.id()) {
                return Err(DomainError::conflict(format!(
                    "duplicate product id {} in catalog",
                    product.id()
                )));
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of product records, applying record defaults.
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProductRecord> = serde_json::from_str(document)?;
        let products = records
            .into_iter()
            .map(Product::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        let catalog = Self::from_products(products)?;
        tracing::debug!(products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
