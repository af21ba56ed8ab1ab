//! Wishlist Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::WishlistItemCreate;
use surrealdb::RecordId;

use super::serde_helpers;

/// A gadget saved for later; unique per (email, gadget_id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistItem {
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
    #[serde(default)]
    pub created_at: i64,
}

impl WishlistItem {
    pub fn from_create(data: WishlistItemCreate, email: String, now: i64) -> Self {
        Self {
            id: None,
            email,
            gadget_id: data.gadget_id,
            name: data.name,
            price_per_day: data.price_per_day,
            image: data.image,
            created_at: now,
        }
    }
}
