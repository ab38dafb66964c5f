//! Shopping cart state and reconciliation.

mod item;
mod reconciler;
mod state;

pub use item::CartItem;
pub use reconciler::{
    AlwaysConfirm, CartReconciler, CartService, ConfirmGate, InCartHint, NeverConfirm,
    MIN_QUANTITY,
};
pub use state::{CartSnapshot, CartState};
