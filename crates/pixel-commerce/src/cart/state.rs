//! Reconciled cart totals.

use crate::cart::CartItem;
use crate::error::CommerceError;
use crate::ids::CartItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Raw cart payload from the server: line items plus the tax amount.
///
/// Line totals inside are server-computed and carried as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    /// Line items in server order.
    pub items: Vec<CartItem>,
    /// Tax for the whole cart.
    pub tax: Money,
}

impl CartSnapshot {
    /// Create a snapshot.
    pub fn new(items: Vec<CartItem>, tax: Money) -> Self {
        Self { items, tax }
    }
}

/// Locally reconciled cart state.
///
/// Totals are always recomputed over the full item sequence after any
/// mutation. Incremental adjustment of a previous total is never done, so
/// the subtotal can not drift from the items it summarizes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    items: Vec<CartItem>,
    subtotal: Money,
    tax: Money,
    total: Money,
    item_count: i64,
    currency: Currency,
}

impl CartState {
    /// Create an empty cart state.
    pub fn empty() -> Self {
        let currency = Currency::default();
        Self {
            items: Vec::new(),
            subtotal: Money::zero(currency),
            tax: Money::zero(currency),
            total: Money::zero(currency),
            item_count: 0,
            currency,
        }
    }

    /// Build reconciled state from a server snapshot.
    ///
    /// Returns error if line totals mix currencies or the sums overflow.
    pub fn from_snapshot(snapshot: CartSnapshot) -> Result<Self, CommerceError> {
        let currency = snapshot
            .items
            .first()
            .map(|i| i.total.currency)
            .unwrap_or(snapshot.tax.currency);
        let mut state = Self {
            items: snapshot.items,
            subtotal: Money::zero(currency),
            tax: snapshot.tax,
            total: Money::zero(currency),
            item_count: 0,
            currency,
        };
        state.recompute()?;
        Ok(state)
    }

    /// Recompute subtotal, total and item count from the full item list.
    pub fn recompute(&mut self) -> Result<(), CommerceError> {
        let subtotal = Money::try_sum(self.items.iter().map(|i| &i.total), self.currency)
            .ok_or(CommerceError::Overflow)?;
        if self.tax.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: self.tax.currency.code().to_string(),
            });
        }
        let total = subtotal.try_add(&self.tax).ok_or(CommerceError::Overflow)?;
        self.subtotal = subtotal;
        self.total = total;
        self.item_count = self.items.iter().map(|i| i.quantity).sum();
        Ok(())
    }

    /// Replace the line item with the same ID and recompute.
    ///
    /// Returns `Ok(false)` without touching anything if no line carries
    /// that ID.
    pub fn replace_item(&mut self, item: CartItem) -> Result<bool, CommerceError> {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            *existing = item;
            self.recompute()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove a line item by ID and recompute.
    pub fn remove_item(&mut self, item_id: &CartItemId) -> Result<bool, CommerceError> {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != item_id);
        let removed = self.items.len() < len_before;
        if removed {
            self.recompute()?;
        }
        Ok(removed)
    }

    /// Line items in server order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get a line item by ID.
    pub fn get_item(&self, item_id: &CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == item_id)
    }

    /// Sum of server-computed line totals.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Tax for the whole cart.
    pub fn tax(&self) -> Money {
        self.tax
    }

    /// Subtotal plus tax.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Total unit count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    /// Check if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::ids::ProductId;

    fn item(id: i64, product_id: i64, name: &str, quantity: i64, total_cents: i64) -> CartItem {
        let product = Product::new(
            ProductId::new(product_id),
            name,
            Money::new(total_cents / quantity.max(1), Currency::USD),
        );
        CartItem::new(
            CartItemId::new(id),
            product,
            quantity,
            Money::new(total_cents, Currency::USD),
        )
    }

    #[test]
    fn test_empty_state() {
        let state = CartState::empty();
        assert!(state.is_empty());
        assert_eq!(state.item_count(), 0);
        assert!(state.subtotal().is_zero());
        assert!(state.total().is_zero());
    }

    #[test]
    fn test_from_snapshot_recomputes_totals() {
        let snapshot = CartSnapshot::new(
            vec![
                item(1, 10, "Hades II", 2, 4000),
                item(2, 11, "Stray", 1, 2999),
            ],
            Money::new(560, Currency::USD),
        );
        let state = CartState::from_snapshot(snapshot).unwrap();

        assert_eq!(state.subtotal().amount_cents, 6999);
        assert_eq!(state.total().amount_cents, 7559);
        assert_eq!(state.item_count(), 3);
    }

    #[test]
    fn test_replace_item_uses_server_total() {
        let snapshot = CartSnapshot::new(
            vec![item(1, 10, "Hades II", 1, 2000)],
            Money::zero(Currency::USD),
        );
        let mut state = CartState::from_snapshot(snapshot).unwrap();

        // The server applies its own pricing; the replacement total wins
        // even when it differs from price times quantity.
        let replaced = state.replace_item(item(1, 10, "Hades II", 3, 5500)).unwrap();
        assert!(replaced);
        assert_eq!(state.subtotal().amount_cents, 5500);
        assert_eq!(state.item_count(), 3);
    }

    #[test]
    fn test_replace_missing_item_is_noop() {
        let snapshot = CartSnapshot::new(
            vec![item(1, 10, "Hades II", 1, 2000)],
            Money::zero(Currency::USD),
        );
        let mut state = CartState::from_snapshot(snapshot).unwrap();

        let replaced = state.replace_item(item(9, 11, "Stray", 1, 2999)).unwrap();
        assert!(!replaced);
        assert_eq!(state.subtotal().amount_cents, 2000);
        assert_eq!(state.items().len(), 1);
    }

    #[test]
    fn test_remove_item_recomputes() {
        let snapshot = CartSnapshot::new(
            vec![
                item(1, 10, "Hades II", 2, 4000),
                item(2, 11, "Stray", 1, 2999),
            ],
            Money::new(100, Currency::USD),
        );
        let mut state = CartState::from_snapshot(snapshot).unwrap();

        assert!(state.remove_item(&CartItemId::new(1)).unwrap());
        assert_eq!(state.subtotal().amount_cents, 2999);
        assert_eq!(state.item_count(), 1);

        assert!(!state.remove_item(&CartItemId::new(1)).unwrap());
    }

    #[test]
    fn test_mixed_currency_tax_rejected() {
        let snapshot = CartSnapshot::new(
            vec![item(1, 10, "Hades II", 1, 2000)],
            Money::new(100, Currency::EUR),
        );
        assert!(matches!(
            CartState::from_snapshot(snapshot),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }
}
