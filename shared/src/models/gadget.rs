//! Gadget Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Create gadget payload (Agent only; owner is taken from the token)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GadgetCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[validate(length(max = 100))]
    pub brand: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(length(max = 2048))]
    pub image: Option<String>,
    #[validate(custom(function = "positive_price"))]
    pub price_per_day: Decimal,
    pub available: Option<bool>,
}

/// Update gadget payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct GadgetUpdate {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    #[validate(length(max = 100))]
    pub brand: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(length(max = 2048))]
    pub image: Option<String>,
    #[validate(custom(function = "positive_price"))]
    pub price_per_day: Option<Decimal>,
    pub available: Option<bool>,
}

/// Field-equality filters for `GET /gadgets`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GadgetQuery {
    pub category: Option<String>,
    pub owner_email: Option<String>,
}

pub(crate) fn positive_price(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_positive() && !value.is_zero() {
        Ok(())
    } else {
        Err(ValidationError::new("positive_price"))
    }
}
