//! Catalog snapshot.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The full product catalog in backend enumeration order.
///
/// Order matters: search tie-breaking and related-product selection both
/// preserve it, so the snapshot never reorders what the backend returned.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products in backend order.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Look up a product by ID.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products as a slice, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

/// Source of the catalog snapshot.
///
/// Implemented over HTTP in `pixel-data`; tests substitute fixtures.
#[async_trait]
pub trait CatalogService {
    /// Fetch the full product catalog.
    async fn fetch_catalog(&self) -> Result<Catalog, CommerceError>;
}
