//! Payment API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{PaymentCreate, PaymentIntentRequest, PaymentIntentResponse};

use crate::auth::{CurrentUser, ensure_same_identity};
use crate::core::ServerState;
use crate::db::models::Payment;
use crate::db::repository::PaymentRepository;
use crate::payments::to_minor_units;
use crate::utils::validation::validated;
use crate::utils::{AppError, AppResult, ErrorCode};

/// POST /create-payment-intent - `price` is in major units
pub async fn create_intent(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<PaymentIntentRequest>,
) -> AppResult<Json<PaymentIntentResponse>> {
    let amount = to_minor_units(payload.price).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::PaymentInvalidAmount,
            format!("Invalid price: {}", payload.price),
        )
    })?;

    let client_secret = state
        .payments
        .create_payment_intent(amount, &state.config.payment_currency)
        .await
        .map_err(|e| {
            tracing::warn!(email = %user.email(), error = %e, "Payment intent failed");
            AppError::with_message(ErrorCode::PaymentGatewayFailed, e.to_string())
        })?;

    tracing::info!(email = %user.email(), amount, "Payment intent created");
    Ok(Json(PaymentIntentResponse { client_secret }))
}

/// POST /payments - record a completed payment for the caller
pub async fn record(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<PaymentCreate>,
) -> AppResult<Json<Payment>> {
    let payload = validated(payload)?;
    let payment = PaymentRepository::new(state.db.clone())
        .create(user.email(), payload)
        .await?;
    Ok(Json(payment))
}

/// GET /payments/{email}
pub async fn history(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<Payment>>> {
    ensure_same_identity(&user, &email)?;
    let payments = PaymentRepository::new(state.db.clone())
        .find_by_email(&email)
        .await?;
    Ok(Json(payments))
}
