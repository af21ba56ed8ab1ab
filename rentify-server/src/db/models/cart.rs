//! Cart Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::CartItemCreate;
use surrealdb::RecordId;

use super::serde_helpers;

/// A gadget placed in a user's cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub email: String,
    pub gadget_id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_day: Decimal,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_rental_days")]
    pub rental_days: u32,
    #[serde(default)]
    pub created_at: i64,
}

fn default_rental_days() -> u32 {
    1
}

impl CartItem {
    pub fn from_create(data: CartItemCreate, email: String, now: i64) -> Self {
        Self {
            id: None,
            email,
            gadget_id: data.gadget_id,
            name: data.name,
            price_per_day: data.price_per_day,
            image: data.image,
            rental_days: data.rental_days,
            created_at: now,
        }
    }
}
