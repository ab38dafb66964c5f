//! Cart line item.

use crate::catalog::Product;
use crate::ids::CartItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A single line in the cart.
///
/// Quantity and line total both come from the server. The total is never
/// recomputed locally from price and quantity; the server owns pricing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Server-issued line item ID.
    pub id: CartItemId,
    /// The product on this line.
    pub product: Product,
    /// Units of the product.
    pub quantity: i64,
    /// Server-computed line total.
    pub total: Money,
}

impl CartItem {
    /// Create a line item.
    pub fn new(id: CartItemId, product: Product, quantity: i64, total: Money) -> Self {
        Self {
            id,
            product,
            quantity,
            total,
        }
    }
}
