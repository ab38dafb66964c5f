//! Cart reconciliation over the authoritative server cart.

use crate::cart::{CartItem, CartSnapshot, CartState};
use crate::error::CommerceError;
use crate::ids::{CartCode, CartItemId, ProductId};
use crate::notify::{Notifier, TracingNotifier};
use async_trait::async_trait;
use tracing::warn;

/// Smallest quantity a cart line may hold.
///
/// Callers reset a rejected quantity input back to this value.
pub const MIN_QUANTITY: i64 = 1;

/// Server-side cart operations.
///
/// The HTTP implementation lives in `pixel-data`; tests substitute fakes.
#[async_trait]
pub trait CartService: Send + Sync {
    /// Fetch the full item list plus tax for a cart code.
    async fn fetch_cart(&self, cart_code: &CartCode) -> Result<CartSnapshot, CommerceError>;

    /// Attach one unit of a product to the cart.
    async fn add_item(
        &self,
        cart_code: &CartCode,
        product_id: &ProductId,
    ) -> Result<(), CommerceError>;

    /// Set a line's quantity; returns the updated item with its
    /// server-recomputed total.
    async fn update_quantity(
        &self,
        item_id: &CartItemId,
        quantity: i64,
    ) -> Result<CartItem, CommerceError>;

    /// Delete a line from the cart.
    async fn remove_item(&self, item_id: &CartItemId) -> Result<(), CommerceError>;

    /// Total unit count for the cart (navigation badge seed).
    async fn item_count(&self, cart_code: &CartCode) -> Result<i64, CommerceError>;

    /// Whether the cart already holds the product.
    async fn contains_product(
        &self,
        cart_code: &CartCode,
        product_id: &ProductId,
    ) -> Result<bool, CommerceError>;
}

/// Synchronous yes/no prompt shown before destructive actions.
pub trait ConfirmGate: Send + Sync {
    /// Ask the user; `true` means proceed.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Gate that accepts every prompt.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl ConfirmGate for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Gate that declines every prompt.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverConfirm;

impl ConfirmGate for NeverConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

/// One-way "already in cart" hint for the product-detail view.
///
/// Flips to in-cart when a query reports membership or an add succeeds.
/// There is no way back; the hint is presentation state, not cart state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InCartHint {
    in_cart: bool,
}

impl InCartHint {
    /// Start with no membership known.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the hint from a membership query result.
    pub fn from_query(in_cart: bool) -> Self {
        Self { in_cart }
    }

    /// Record a successful add.
    pub fn mark_added(&mut self) {
        self.in_cart = true;
    }

    /// Whether the product is known to be in the cart.
    pub fn is_in_cart(&self) -> bool {
        self.in_cart
    }
}

/// Keeps local cart state synchronized with the server after every
/// mutation.
///
/// Totals are recomputed over the full item sequence the server returned,
/// never adjusted by delta, so server-side pricing rules can not make the
/// local numbers drift (the badge's +1 on add is the one sanctioned delta;
/// the next recompute overwrites it).
///
/// Mutation failures are reported through the [`Notifier`] and leave the
/// cart in its last known-good state. Nothing is retried; the user
/// re-triggers the action.
pub struct CartReconciler<S: CartService> {
    service: S,
    state: CartState,
    badge: i64,
    notifier: Box<dyn Notifier>,
    gate: Box<dyn ConfirmGate>,
}

impl<S: CartService> CartReconciler<S> {
    /// Create a reconciler with an empty cart.
    ///
    /// Defaults to a [`TracingNotifier`] and a gate that accepts every
    /// prompt; override with [`with_notifier`](Self::with_notifier) and
    /// [`with_gate`](Self::with_gate).
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: CartState::empty(),
            badge: 0,
            notifier: Box::new(TracingNotifier),
            gate: Box::new(AlwaysConfirm),
        }
    }

    /// Set the notification sink.
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Set the confirmation gate.
    pub fn with_gate(mut self, gate: Box<dyn ConfirmGate>) -> Self {
        self.gate = gate;
        self
    }

    /// Current reconciled cart state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Current navigation-bar badge count.
    pub fn badge_count(&self) -> i64 {
        self.badge
    }

    /// Load the authoritative cart for a code.
    ///
    /// With no code present (first-time visitor) this yields an empty cart
    /// without a request. On failure the previous state is kept.
    pub async fn load(&mut self, cart_code: Option<&CartCode>) -> Result<(), CommerceError> {
        let Some(code) = cart_code else {
            self.state = CartState::empty();
            self.badge = 0;
            return Ok(());
        };

        match self.service.fetch_cart(code).await {
            Ok(snapshot) => {
                self.state = CartState::from_snapshot(snapshot)?;
                self.badge = self.state.item_count();
                Ok(())
            }
            Err(err) => {
                warn!("Failed to load cart {}: {}", code, err);
                Err(err)
            }
        }
    }

    /// Seed the badge from the server's unit count at application mount.
    ///
    /// A failure leaves the badge unchanged; the badge is a hint, not
    /// checkout state.
    pub async fn load_badge(&mut self, cart_code: &CartCode) {
        match self.service.item_count(cart_code).await {
            Ok(count) => self.badge = count,
            Err(err) => warn!("Failed to load cart badge: {}", err),
        }
    }

    /// Add one unit of a product to the cart.
    ///
    /// On success the badge goes up by one; the caller flips its
    /// [`InCartHint`]. On failure nothing local changes.
    pub async fn add_item(
        &mut self,
        cart_code: &CartCode,
        product_id: &ProductId,
    ) -> Result<(), CommerceError> {
        match self.service.add_item(cart_code, product_id).await {
            Ok(()) => {
                self.badge += 1;
                self.notifier.success("Added to cart");
                Ok(())
            }
            Err(err) => {
                self.notifier.error("Failed to add to cart");
                Err(err)
            }
        }
    }

    /// Set a cart line's quantity.
    ///
    /// Quantities below [`MIN_QUANTITY`] are rejected locally without a
    /// request; the caller resets its input to the minimum. On success the
    /// server-returned item replaces the local line and subtotal and count
    /// are recomputed over the whole sequence.
    pub async fn update_quantity(
        &mut self,
        item_id: &CartItemId,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        if quantity < MIN_QUANTITY {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        match self.service.update_quantity(item_id, quantity).await {
            Ok(updated) => {
                if let Err(err) = self.state.replace_item(updated) {
                    self.notifier.error("Failed to update cart item");
                    return Err(err);
                }
                self.badge = self.state.item_count();
                self.notifier.success("Cart item updated");
                Ok(())
            }
            Err(err) => {
                self.notifier.error("Failed to update cart item");
                Err(err)
            }
        }
    }

    /// Remove a cart line after user confirmation.
    ///
    /// Returns `Ok(false)` without sending a request when the prompt is
    /// declined, `Ok(true)` after a confirmed and successful removal.
    pub async fn remove_item(&mut self, item_id: &CartItemId) -> Result<bool, CommerceError> {
        if !self.gate.confirm("Remove this item from the cart?") {
            return Ok(false);
        }

        match self.service.remove_item(item_id).await {
            Ok(()) => {
                if let Err(err) = self.state.remove_item(item_id) {
                    self.notifier.error("Failed to remove cart item");
                    return Err(err);
                }
                self.badge = self.state.item_count();
                self.notifier.success("Cart item removed");
                Ok(true)
            }
            Err(err) => {
                self.notifier.error("Failed to remove cart item");
                Err(err)
            }
        }
    }

    /// Whether the cart already holds the product.
    pub async fn in_cart(
        &self,
        cart_code: &CartCode,
        product_id: &ProductId,
    ) -> Result<bool, CommerceError> {
        self.service.contains_product(cart_code, product_id).await
    }

    /// Drop all local cart state and zero the badge.
    ///
    /// Called after checkout completion and on logout, alongside clearing
    /// the stored cart code.
    pub fn clear_local(&mut self) {
        self.state = CartState::empty();
        self.badge = 0;
    }
}
