//! Gadget Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{GadgetCreate, GadgetUpdate};
use surrealdb::RecordId;

use super::serde_helpers;

/// Rentable item listed by an agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gadget {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_day: Decimal,
    #[serde(default = "default_true")]
    pub available: bool,
    pub owner_email: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

impl Gadget {
    pub fn from_create(data: GadgetCreate, owner_email: String, now: i64) -> Self {
        Self {
            id: None,
            name: data.name,
            category: data.category,
            brand: data.brand,
            description: data.description,
            image: data.image,
            price_per_day: data.price_per_day,
            available: data.available.unwrap_or(true),
            owner_email,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Fields written by a partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize)]
pub struct GadgetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price_per_day: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    pub updated_at: i64,
}

impl GadgetPatch {
    pub fn from_update(data: GadgetUpdate, now: i64) -> Self {
        Self {
            name: data.name,
            category: data.category,
            brand: data.brand,
            description: data.description,
            image: data.image,
            price_per_day: data.price_per_day,
            available: data.available,
            updated_at: now,
        }
    }
}
