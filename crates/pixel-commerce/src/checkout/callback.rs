//! Payment provider redirect callbacks.

use serde::{Deserialize, Serialize};

/// Payment providers the storefront checks out through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentProvider {
    PayPal,
    Flutterwave,
}

impl PaymentProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentProvider::PayPal => "paypal",
            PaymentProvider::Flutterwave => "flutterwave",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentProvider::PayPal => "PayPal",
            PaymentProvider::Flutterwave => "Flutterwave",
        }
    }
}

/// Parameters a provider redirect carries back to the storefront.
///
/// Each provider is recognized by its full parameter set; a query
/// missing any of a provider's parameters is not that provider's
/// callback. Values are kept verbatim and relayed to the backend for
/// verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentCallback {
    PayPal {
        payment_id: String,
        payer_id: String,
        reference: String,
    },
    Flutterwave {
        status: String,
        tx_ref: String,
        transaction_id: String,
    },
}

impl PaymentCallback {
    /// Recognize a callback in a redirect query string.
    ///
    /// Accepts the query with or without its leading `?`. PayPal
    /// parameters are checked first. Returns `None` when neither
    /// provider's full parameter set is present.
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);

        if let (Some(payment_id), Some(payer_id), Some(reference)) = (
            param(query, "paymentId"),
            param(query, "PayerID"),
            param(query, "ref"),
        ) {
            return Some(PaymentCallback::PayPal {
                payment_id: payment_id.to_string(),
                payer_id: payer_id.to_string(),
                reference: reference.to_string(),
            });
        }

        if let (Some(status), Some(tx_ref), Some(transaction_id)) = (
            param(query, "status"),
            param(query, "tx_ref"),
            param(query, "transaction_id"),
        ) {
            return Some(PaymentCallback::Flutterwave {
                status: status.to_string(),
                tx_ref: tx_ref.to_string(),
                transaction_id: transaction_id.to_string(),
            });
        }

        None
    }

    /// The provider this callback came from.
    pub fn provider(&self) -> PaymentProvider {
        match self {
            PaymentCallback::PayPal { .. } => PaymentProvider::PayPal,
            PaymentCallback::Flutterwave { .. } => PaymentProvider::Flutterwave,
        }
    }

    /// The query string relayed to the backend verification endpoint.
    pub fn query_string(&self) -> String {
        match self {
            PaymentCallback::PayPal {
                payment_id,
                payer_id,
                reference,
            } => format!(
                "paymentId={}&PayerID={}&ref={}",
                payment_id, payer_id, reference
            ),
            PaymentCallback::Flutterwave {
                status,
                tx_ref,
                transaction_id,
            } => format!(
                "status={}&tx_ref={}&transaction_id={}",
                status, tx_ref, transaction_id
            ),
        }
    }
}

/// Find a non-empty query parameter value.
fn param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key && !v.is_empty()).then_some(v)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paypal_callback_recognized() {
        let callback =
            PaymentCallback::from_query("?paymentId=PAYID-9&PayerID=H7K2&ref=k3J9vQ2xLm0").unwrap();

        assert_eq!(callback.provider(), PaymentProvider::PayPal);
        assert_eq!(
            callback.query_string(),
            "paymentId=PAYID-9&PayerID=H7K2&ref=k3J9vQ2xLm0"
        );
    }

    #[test]
    fn test_flutterwave_callback_recognized() {
        let callback =
            PaymentCallback::from_query("status=successful&tx_ref=k3J9vQ2xLm0&transaction_id=4411")
                .unwrap();

        assert_eq!(callback.provider(), PaymentProvider::Flutterwave);
        match callback {
            PaymentCallback::Flutterwave { status, .. } => assert_eq!(status, "successful"),
            other => panic!("wrong callback: {:?}", other),
        }
    }

    #[test]
    fn test_partial_parameters_not_recognized() {
        assert!(PaymentCallback::from_query("paymentId=PAYID-9&PayerID=H7K2").is_none());
        assert!(PaymentCallback::from_query("status=successful&tx_ref=abc").is_none());
        assert!(PaymentCallback::from_query("").is_none());
    }

    #[test]
    fn test_empty_values_not_recognized() {
        assert!(PaymentCallback::from_query("paymentId=&PayerID=H7K2&ref=abc").is_none());
    }

    #[test]
    fn test_provider_names() {
        assert_eq!(PaymentProvider::PayPal.as_str(), "paypal");
        assert_eq!(PaymentProvider::Flutterwave.display_name(), "Flutterwave");
    }
}
