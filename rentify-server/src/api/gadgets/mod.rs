//! Gadget routes
//!
//! Anyone may browse; agents list gadgets and manage their own.

mod handler;

use axum::{
    Router,
    routing::{get, patch, post},
};
use shared::models::Role;

use super::role_gated;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/gadgets", get(handler::list))
        .route("/gadgets/{id}", get(handler::get_by_id));

    let agent_routes = role_gated(
        Router::new()
            .route("/gadgets", post(handler::create))
            .route(
                "/gadgets/{id}",
                patch(handler::update).delete(handler::delete),
            ),
        state,
        Role::Agent,
    );

    read_routes.merge(agent_routes)
}
