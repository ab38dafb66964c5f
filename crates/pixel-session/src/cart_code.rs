//! Cart code persistence.

use crate::{ClientStore, SessionError};
use pixel_commerce::cart::{CartReconciler, CartService};
use pixel_commerce::ids::CartCode;

/// Storage key for the cart code.
const CART_CODE_KEY: &str = "cart_code";

/// Loads and persists the cart code that correlates the shopper with the
/// server-side cart.
///
/// The code is generated on first use and kept until checkout completes or
/// the user signs out.
pub struct CartCodeStore<'a> {
    store: &'a ClientStore,
}

impl<'a> CartCodeStore<'a> {
    /// Bind to a client store.
    pub fn new(store: &'a ClientStore) -> Self {
        Self { store }
    }

    /// Load the persisted cart code, if any.
    pub fn load(&self) -> Result<Option<CartCode>, SessionError> {
        self.store.get(CART_CODE_KEY)
    }

    /// Load the cart code, generating and persisting a fresh one if absent.
    pub fn obtain(&self) -> Result<CartCode, SessionError> {
        if let Some(code) = self.load()? {
            return Ok(code);
        }
        let code = CartCode::generate();
        self.store.set(CART_CODE_KEY, &code)?;
        Ok(code)
    }

    /// Remove the persisted cart code.
    ///
    /// Called after a confirmed checkout and on sign-out; the next `obtain`
    /// starts a fresh cart.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.store.delete(CART_CODE_KEY)
    }
}

/// Retire the cart after a confirmed checkout.
///
/// Drops the stored cart code and resets the local cart state and badge;
/// the next load observes no code and yields the empty cart.
pub fn retire_cart<S: CartService>(
    store: &ClientStore,
    cart: &mut CartReconciler<S>,
) -> Result<(), SessionError> {
    CartCodeStore::new(store).clear()?;
    cart.clear_local();
    Ok(())
}
