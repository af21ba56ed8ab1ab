//! Payment provider integration via REST API (no SDK dependency)

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

const PAYMENT_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Payment provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Payment provider rejected the request: {0}")]
    Rejected(String),
}

/// Creates payment intents with an external provider
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an intent for `amount_minor` (smallest currency unit) and
    /// return its client secret
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<String, PaymentError>;
}

/// Stripe payment intents
pub struct StripeGateway {
    client: reqwest::Client,
    secret_key: String,
}

impl StripeGateway {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key: secret_key.into(),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<String, PaymentError> {
        let amount = amount_minor.to_string();
        let resp: serde_json::Value = self
            .client
            .post(PAYMENT_INTENTS_URL)
            .basic_auth(&self.secret_key, None::<&str>)
            .header("Idempotency-Key", uuid::Uuid::new_v4().to_string())
            .form(&[
                ("amount", amount.as_str()),
                ("currency", currency),
                ("payment_method_types[]", "card"),
            ])
            .send()
            .await?
            .json()
            .await?;

        client_secret_from(&resp)
    }
}

fn client_secret_from(resp: &serde_json::Value) -> Result<String, PaymentError> {
    if let Some(secret) = resp["client_secret"].as_str() {
        return Ok(secret.to_string());
    }
    let reason = resp["error"]["message"]
        .as_str()
        .map(String::from)
        .unwrap_or_else(|| format!("unexpected response: {resp}"));
    Err(PaymentError::Rejected(reason))
}

/// Convert a major-unit price to minor units
///
/// Fractions of a minor unit are truncated. Returns `None` for
/// non-positive amounts or amounts that do not fit in an `i64`.
pub fn to_minor_units(price: Decimal) -> Option<i64> {
    let minor = price.checked_mul(Decimal::ONE_HUNDRED)?.trunc().to_i64()?;
    (minor > 0).then_some(minor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_minor_units() {
        assert_eq!(to_minor_units(Decimal::new(1999, 2)), Some(1999));
        assert_eq!(to_minor_units(Decimal::new(12, 0)), Some(1200));
        assert_eq!(to_minor_units(Decimal::new(10999, 3)), Some(1099));
    }

    #[test]
    fn test_to_minor_units_rejects_non_positive() {
        assert_eq!(to_minor_units(Decimal::ZERO), None);
        assert_eq!(to_minor_units(Decimal::new(-5, 0)), None);
        assert_eq!(to_minor_units(Decimal::new(4, 3)), None);
    }

    #[test]
    fn test_to_minor_units_rejects_oversized() {
        assert_eq!(to_minor_units(Decimal::MAX), None);
        let huge: Decimal = "70000000000000000000000000000".parse().unwrap();
        assert_eq!(to_minor_units(huge), None);
        // fits in Decimal, not in i64 cents
        assert_eq!(to_minor_units(Decimal::from(i64::MAX)), None);
    }

    #[test]
    fn test_client_secret_from_response() {
        let ok = json!({"id": "pi_1", "client_secret": "pi_1_secret_x"});
        assert_eq!(client_secret_from(&ok).unwrap(), "pi_1_secret_x");

        let err = json!({"error": {"message": "Amount must be at least 50 cents"}});
        match client_secret_from(&err) {
            Err(PaymentError::Rejected(msg)) => assert!(msg.contains("50 cents")),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
