//! Wishlist API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{OwnerQuery, WishlistItemCreate};

use crate::auth::{CurrentUser, ensure_same_identity};
use crate::core::ServerState;
use crate::db::models::WishlistItem;
use crate::db::repository::{RepoError, WishlistRepository};
use crate::utils::validation::validated;
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /wishlist?email=
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<OwnerQuery>,
) -> AppResult<Json<Vec<WishlistItem>>> {
    ensure_same_identity(&user, &query.email)?;
    let items = WishlistRepository::new(state.db.clone())
        .find_by_email(&query.email)
        .await?;
    Ok(Json(items))
}

/// POST /wishlist - a gadget can be saved once per user
pub async fn add(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<WishlistItemCreate>,
) -> AppResult<Json<WishlistItem>> {
    let payload = validated(payload)?;
    let item = WishlistRepository::new(state.db.clone())
        .create(user.email(), payload)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(msg) => {
                AppError::with_message(ErrorCode::WishlistItemExists, msg)
            }
            other => other.into(),
        })?;
    Ok(Json(item))
}

/// DELETE /wishlist/{id}
pub async fn remove(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<WishlistItem>> {
    let repo = WishlistRepository::new(state.db.clone());
    let item = repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::with_message(
            ErrorCode::WishlistItemNotFound,
            format!("Wishlist item {} not found", id),
        )
    })?;

    if item.email != user.email() {
        return Err(AppError::new(ErrorCode::NotOwner).with_detail("wishlist_item", id));
    }

    let item = repo.delete(&id).await?;
    Ok(Json(item))
}
