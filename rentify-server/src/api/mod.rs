//! HTTP API
//!
//! - [`health`] - liveness banner and health check
//! - [`token`] - token issuance
//! - [`users`] - registration, role queries and administration
//! - [`gadgets`] - gadget catalog, managed by agents
//! - [`carts`] - per-user rental cart
//! - [`wishlist`] - per-user saved gadgets
//! - [`payments`] - payment intents and payment history

pub mod carts;
pub mod gadgets;
pub mod health;
pub mod payments;
pub mod token;
pub mod users;
pub mod wishlist;

use axum::{Router, middleware};
use shared::models::Role;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::{require_role, require_token};
use crate::core::ServerState;

/// Build the application with every route, middleware and state applied
pub fn router(state: ServerState) -> Router {
    build_router(&state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// All routes, gates attached, no outer middleware
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(token::router())
        .merge(users::router(state))
        .merge(gadgets::router(state))
        .merge(carts::router(state))
        .merge(wishlist::router(state))
        .merge(payments::router(state))
}

/// Require a valid token on every route already in `routes`
pub(crate) fn token_gated(routes: Router<ServerState>, state: &ServerState) -> Router<ServerState> {
    routes.route_layer(middleware::from_fn_with_state(state.clone(), require_token))
}

/// Require a valid token and the stored `role` on every route already in `routes`
///
/// The token gate is the outer layer, so it always runs before the role gate.
pub(crate) fn role_gated(
    routes: Router<ServerState>,
    state: &ServerState,
    role: Role,
) -> Router<ServerState> {
    let routes = routes.route_layer(middleware::from_fn_with_state(
        state.clone(),
        require_role(role),
    ));
    token_gated(routes, state)
}
