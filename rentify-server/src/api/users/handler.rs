//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{AdminFlag, AgentFlag, Role, RoleUpdate, RoleView, UserCreate};

use crate::auth::{CurrentUser, ensure_same_identity};
use crate::core::ServerState;
use crate::db::models::User;
use crate::db::repository::{RepoError, UserRepository};
use crate::security_log;
use crate::utils::validation::validated;
use crate::utils::{AppError, AppResult, ErrorCode};

/// POST /users - register as User, or Admin for the configured `ADMIN_EMAIL`
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<User>> {
    let payload = validated(payload)?;
    let repo = UserRepository::new(state.db.clone());

    let role = if state.config.is_bootstrap_admin(&payload.email) {
        Role::Admin
    } else {
        Role::User
    };

    let user = repo.create(payload, role).await.map_err(|e| match e {
        RepoError::Duplicate(_) => AppError::new(ErrorCode::UserAlreadyExists),
        other => other.into(),
    })?;

    if user.role == Role::Admin {
        security_log!("INFO", "admin_bootstrap", email = user.email.as_str());
    }
    tracing::info!(email = %user.email, "User registered");
    Ok(Json(user))
}

/// GET /all-users
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepository::new(state.db.clone()).find_all().await?;
    Ok(Json(users))
}

async fn stored_role(state: &ServerState, email: &str) -> AppResult<Option<Role>> {
    let user = UserRepository::new(state.db.clone())
        .find_by_email(email)
        .await?;
    Ok(user.map(|u| u.role))
}

/// GET /users/admin/{email}
pub async fn is_admin(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(email): Path<String>,
) -> AppResult<Json<AdminFlag>> {
    ensure_same_identity(&user, &email)?;
    let role = stored_role(&state, &email).await?;
    Ok(Json(AdminFlag {
        admin: role == Some(Role::Admin),
    }))
}

/// GET /users/agent/{email}
pub async fn is_agent(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(email): Path<String>,
) -> AppResult<Json<AgentFlag>> {
    ensure_same_identity(&user, &email)?;
    let role = stored_role(&state, &email).await?;
    Ok(Json(AgentFlag {
        agent: role == Some(Role::Agent),
    }))
}

/// GET /users/role/{email}
pub async fn get_role(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(email): Path<String>,
) -> AppResult<Json<RoleView>> {
    ensure_same_identity(&user, &email)?;
    let role = stored_role(&state, &email)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;
    Ok(Json(RoleView { role }))
}

/// PATCH /users/role/{email} - change a user's role
pub async fn update_role(
    State(state): State<ServerState>,
    admin: CurrentUser,
    Path(email): Path<String>,
    Json(payload): Json<RoleUpdate>,
) -> AppResult<Json<User>> {
    let user = UserRepository::new(state.db.clone())
        .update_role(&email, payload.role)
        .await
        .map_err(user_not_found)?;

    security_log!(
        "INFO",
        "role_changed",
        by = admin.email(),
        email = email.as_str(),
        role = payload.role.as_str()
    );
    Ok(Json(user))
}

/// DELETE /users/{email}
pub async fn delete(
    State(state): State<ServerState>,
    admin: CurrentUser,
    Path(email): Path<String>,
) -> AppResult<Json<User>> {
    let user = UserRepository::new(state.db.clone())
        .delete_by_email(&email)
        .await
        .map_err(user_not_found)?;

    security_log!(
        "INFO",
        "user_deleted",
        by = admin.email(),
        email = email.as_str()
    );
    Ok(Json(user))
}

fn user_not_found(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(msg) => AppError::with_message(ErrorCode::UserNotFound, msg),
        other => other.into(),
    }
}
