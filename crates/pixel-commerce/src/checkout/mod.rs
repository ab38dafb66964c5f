//! Checkout completion over provider redirect callbacks.

mod callback;
mod flow;

pub use callback::{PaymentCallback, PaymentProvider};
pub use flow::{CheckoutCompletion, CheckoutService, CheckoutState, PaymentOutcome};
