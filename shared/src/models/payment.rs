//! Payment payloads

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::gadget::positive_price;

/// `POST /create-payment-intent` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntentRequest {
    pub price: Decimal,
}

/// `POST /create-payment-intent` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

/// Completed payment record payload; the payer is the token email
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PaymentCreate {
    #[validate(custom(function = "positive_price"))]
    pub amount: Decimal,
    #[validate(length(min = 1, max = 255))]
    pub transaction_id: String,
    #[serde(default)]
    pub gadget_ids: Vec<String>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
}
