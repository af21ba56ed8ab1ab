//! Payment Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::PaymentCreate;
use surrealdb::RecordId;

use super::serde_helpers;

/// Completed payment record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub email: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub transaction_id: String,
    #[serde(default)]
    pub gadget_ids: Vec<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub created_at: i64,
}

fn default_status() -> String {
    "succeeded".to_string()
}

impl Payment {
    pub fn from_create(data: PaymentCreate, email: String, now: i64) -> Self {
        Self {
            id: None,
            email,
            amount: data.amount,
            transaction_id: data.transaction_id,
            gadget_ids: data.gadget_ids,
            status: data.status.unwrap_or_else(default_status),
            created_at: now,
        }
    }
}
