//! Outcome notifications for cart and checkout actions.

use tracing::{info, warn};

/// Sink for user-facing action outcomes.
///
/// The storefront surfaces these as toast banners. Headless hosts can
/// forward them to a log or drop them.
pub trait Notifier: Send + Sync {
    /// An action succeeded.
    fn success(&self, message: &str);
    /// An action failed.
    fn error(&self, message: &str);
}

/// Notifier that forwards outcomes to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!("{}", message);
    }

    fn error(&self, message: &str) {
        warn!("{}", message);
    }
}

/// Notifier that drops every outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn success(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifier_as_trait_object() {
        let notifier: Box<dyn Notifier> = Box::new(NullNotifier);
        notifier.success("Added to cart");
        notifier.error("Network error");
    }
}
