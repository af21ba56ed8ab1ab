//! User Model

use serde::{Deserialize, Serialize};
use shared::models::Role;
use surrealdb::RecordId;

use super::serde_helpers;

/// Registered user
///
/// `email` is unique and is the identity carried in tokens; `role` is read
/// fresh by the role gate on every guarded request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub role: Role,
    /// Unix millis
    #[serde(default)]
    pub created_at: i64,
}

impl User {
    pub fn new(email: String, name: Option<String>, photo: Option<String>, created_at: i64) -> Self {
        Self {
            id: None,
            email,
            name,
            photo,
            role: Role::User,
            created_at,
        }
    }
}
