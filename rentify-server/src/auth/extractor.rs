//! Authenticated identity extractor

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::IdentityClaims;
use crate::utils::AppError;

/// Identity of the verified caller
///
/// Inserted into request extensions by [`require_token`](super::require_token);
/// handlers behind the gate take it as an argument.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub claims: IdentityClaims,
}

impl CurrentUser {
    pub fn email(&self) -> &str {
        &self.claims.email
    }
}

impl From<IdentityClaims> for CurrentUser {
    fn from(claims: IdentityClaims) -> Self {
        Self { claims }
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(AppError::unauthenticated)
    }
}
