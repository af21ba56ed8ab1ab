use axum::{Json, extract::State};
use serde::Serialize;

use crate::auth::IdentityClaims;
use crate::core::ServerState;
use crate::utils::validation::validate_email_param;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /jwt - issue a token for the supplied claims
pub async fn issue(
    State(state): State<ServerState>,
    Json(claims): Json<IdentityClaims>,
) -> AppResult<Json<TokenResponse>> {
    validate_email_param(&claims.email)?;

    let token = state
        .get_jwt_service()
        .issue(&claims)
        .map_err(|e| AppError::internal(e.to_string()))?;

    tracing::debug!(email = %claims.email, "Token issued");
    Ok(Json(TokenResponse { token }))
}
