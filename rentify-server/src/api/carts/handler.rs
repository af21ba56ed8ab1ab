//! Cart API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{CartItemCreate, OwnerQuery};

use crate::auth::{CurrentUser, ensure_same_identity};
use crate::core::ServerState;
use crate::db::models::CartItem;
use crate::db::repository::CartRepository;
use crate::utils::validation::validated;
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /carts?email=
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<OwnerQuery>,
) -> AppResult<Json<Vec<CartItem>>> {
    ensure_same_identity(&user, &query.email)?;
    let items = CartRepository::new(state.db.clone())
        .find_by_email(&query.email)
        .await?;
    Ok(Json(items))
}

/// POST /carts - add to the caller's cart
pub async fn add(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CartItemCreate>,
) -> AppResult<Json<CartItem>> {
    let payload = validated(payload)?;
    let item = CartRepository::new(state.db.clone())
        .create(user.email(), payload)
        .await?;
    Ok(Json(item))
}

/// DELETE /carts/{id}
pub async fn remove(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<CartItem>> {
    let repo = CartRepository::new(state.db.clone());
    let item = repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::CartItemNotFound, format!("Cart item {} not found", id))
    })?;

    if item.email != user.email() {
        return Err(AppError::new(ErrorCode::NotOwner).with_detail("cart_item", id));
    }

    let item = repo.delete(&id).await?;
    Ok(Json(item))
}
