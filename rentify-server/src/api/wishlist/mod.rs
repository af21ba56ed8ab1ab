//! Wishlist routes
//!
//! Every route needs a token; a wishlist is only visible to its owner.

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use super::token_gated;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    token_gated(
        Router::new()
            .route("/wishlist", get(handler::list).post(handler::add))
            .route("/wishlist/{id}", delete(handler::remove)),
        state,
    )
}
