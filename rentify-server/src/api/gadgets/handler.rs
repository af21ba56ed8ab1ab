//! Gadget API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{GadgetCreate, GadgetQuery, GadgetUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::Gadget;
use crate::db::repository::GadgetRepository;
use crate::utils::validation::validated;
use crate::utils::{AppError, AppResult, ErrorCode};

fn gadget_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::GadgetNotFound, format!("Gadget {} not found", id))
}

/// Load a gadget and check the caller owns it
async fn owned_gadget(repo: &GadgetRepository, id: &str, user: &CurrentUser) -> AppResult<Gadget> {
    let gadget = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| gadget_not_found(id))?;

    if gadget.owner_email != user.email() {
        return Err(AppError::new(ErrorCode::NotOwner).with_detail("gadget", id));
    }
    Ok(gadget)
}

/// GET /gadgets - optional `category` and `owner_email` filters
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<GadgetQuery>,
) -> AppResult<Json<Vec<Gadget>>> {
    let gadgets = GadgetRepository::new(state.db.clone())
        .find_all(&filter)
        .await?;
    Ok(Json(gadgets))
}

/// GET /gadgets/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Gadget>> {
    let gadget = GadgetRepository::new(state.db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| gadget_not_found(&id))?;
    Ok(Json(gadget))
}

/// POST /gadgets - the caller becomes the owner
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<GadgetCreate>,
) -> AppResult<Json<Gadget>> {
    let payload = validated(payload)?;
    let gadget = GadgetRepository::new(state.db.clone())
        .create(user.email(), payload)
        .await?;

    tracing::info!(owner = %gadget.owner_email, name = %gadget.name, "Gadget created");
    Ok(Json(gadget))
}

/// PATCH /gadgets/{id}
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<GadgetUpdate>,
) -> AppResult<Json<Gadget>> {
    let payload = validated(payload)?;
    let repo = GadgetRepository::new(state.db.clone());
    owned_gadget(&repo, &id, &user).await?;

    let gadget = repo.update(&id, payload).await?;
    Ok(Json(gadget))
}

/// DELETE /gadgets/{id}
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Gadget>> {
    let repo = GadgetRepository::new(state.db.clone());
    owned_gadget(&repo, &id, &user).await?;

    let gadget = repo.delete(&id).await?;
    tracing::info!(owner = %gadget.owner_email, id = %id, "Gadget deleted");
    Ok(Json(gadget))
}
