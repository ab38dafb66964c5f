//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Immutable from the client's perspective: sourced wholesale from the
/// catalog fetch, never mutated locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Backend-issued identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: Option<String>,
    /// Category label (e.g., "Juegos", "Electronicos").
    pub category: Option<String>,
    /// Unit price.
    pub price: Money,
    /// Image reference, relative to the backend media root.
    pub image: Option<String>,
}

impl Product {
    /// Create a new product.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            category: None,
            price,
            image: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Formatted unit price (e.g., "$59.99").
    pub fn price_display(&self) -> String {
        self.price.display()
    }

    /// Whether the product carries the given category label.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_builder() {
        let product = Product::new(
            ProductId::new(1),
            "FIFA 24",
            Money::new(5999, Currency::USD),
        )
        .with_category("Juegos")
        .with_description("Futbol de nueva generacion");

        assert_eq!(product.name, "FIFA 24");
        assert!(product.in_category("Juegos"));
        assert!(!product.in_category("Electronicos"));
        assert_eq!(product.price_display(), "$59.99");
    }
}
