//! Cart and wish-list payloads

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::gadget::positive_price;

/// Add-to-cart payload; the owner is the token email
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CartItemCreate {
    #[validate(length(min = 1, max = 200))]
    pub gadget_id: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(custom(function = "positive_price"))]
    pub price_per_day: Decimal,
    #[validate(length(max = 2048))]
    pub image: Option<String>,
    #[serde(default = "default_rental_days")]
    #[validate(range(min = 1, max = 365))]
    pub rental_days: u32,
}

fn default_rental_days() -> u32 {
    1
}

/// Add-to-wish-list payload; the owner is the token email
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WishlistItemCreate {
    #[validate(length(min = 1, max = 200))]
    pub gadget_id: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(custom(function = "positive_price"))]
    pub price_per_day: Decimal,
    #[validate(length(max = 2048))]
    pub image: Option<String>,
}

/// `?email=` filter for per-owner collections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerQuery {
    pub email: String,
}
