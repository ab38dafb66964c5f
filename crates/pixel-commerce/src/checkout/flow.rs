//! Checkout completion state machine.

use crate::checkout::PaymentCallback;
use crate::error::CommerceError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Server verdict for a verified payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOutcome {
    /// Headline status message.
    pub message: String,
    /// Supporting detail line.
    pub sub_message: String,
}

/// Where checkout completion stands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CheckoutState {
    /// Callback received, awaiting server confirmation.
    #[default]
    Verifying,
    /// The server confirmed the payment.
    Confirmed(PaymentOutcome),
    /// Verification failed; the reason is kept for display.
    Failed(String),
}

impl CheckoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Verifying => "verifying",
            CheckoutState::Confirmed(_) => "confirmed",
            CheckoutState::Failed(_) => "failed",
        }
    }

    /// Whether verification has reached a final verdict.
    pub fn is_settled(&self) -> bool {
        !matches!(self, CheckoutState::Verifying)
    }
}

/// Backend verification of a provider callback.
///
/// The HTTP implementation lives in `pixel-data`.
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Relay the provider's callback parameters for verification.
    async fn confirm(&self, callback: &PaymentCallback) -> Result<PaymentOutcome, CommerceError>;
}

/// Drives a payment callback to its settled state.
///
/// Starts at [`CheckoutState::Verifying`] and settles exactly once.
/// After a confirmed verification the caller clears the stored cart code
/// and zeroes the badge; the server-side cart no longer exists. A failed
/// verification is terminal for this completion; retrying means starting
/// a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutCompletion {
    state: CheckoutState,
}

impl CheckoutCompletion {
    /// Start a completion awaiting verification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current completion state.
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Verify the callback with the backend and settle.
    ///
    /// Returns error without a request if this completion already
    /// settled.
    pub async fn verify<S: CheckoutService>(
        &mut self,
        service: &S,
        callback: &PaymentCallback,
    ) -> Result<(), CommerceError> {
        if self.state.is_settled() {
            return Err(CommerceError::InvalidCheckoutTransition {
                from: self.state.as_str().to_string(),
                to: "verifying".to_string(),
            });
        }

        match service.confirm(callback).await {
            Ok(outcome) => {
                info!(
                    provider = callback.provider().as_str(),
                    "payment confirmed"
                );
                self.state = CheckoutState::Confirmed(outcome);
                Ok(())
            }
            Err(err) => {
                warn!(
                    provider = callback.provider().as_str(),
                    "payment verification failed: {}", err
                );
                self.state = CheckoutState::Failed(err.to_string());
                Err(err)
            }
        }
    }
}
