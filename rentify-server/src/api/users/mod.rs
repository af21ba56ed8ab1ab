//! User routes
//!
//! | Path | Method | Gate |
//! |------|--------|------|
//! | /users | POST | none |
//! | /all-users | GET | token + Admin |
//! | /users/admin/{email} | GET | token + same identity |
//! | /users/agent/{email} | GET | token + same identity |
//! | /users/role/{email} | GET | token + same identity |
//! | /users/role/{email} | PATCH | token + Admin |
//! | /users/{email} | DELETE | token + Admin |

mod handler;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use shared::models::Role;

use super::{role_gated, token_gated};
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    let public_routes = Router::new().route("/users", post(handler::register));

    let self_routes = token_gated(
        Router::new()
            .route("/users/admin/{email}", get(handler::is_admin))
            .route("/users/agent/{email}", get(handler::is_agent))
            .route("/users/role/{email}", get(handler::get_role)),
        state,
    );

    let admin_routes = role_gated(
        Router::new()
            .route("/all-users", get(handler::list))
            .route("/users/role/{email}", patch(handler::update_role))
            .route("/users/{email}", delete(handler::delete)),
        state,
        Role::Admin,
    );

    public_routes.merge(self_routes).merge(admin_routes)
}
