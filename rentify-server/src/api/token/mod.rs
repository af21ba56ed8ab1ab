//! Token issuance
//!
//! `POST /jwt` signs whatever identity claims the caller supplies. It does
//! not check that the user is registered; the role gate does that later.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/jwt", post(handler::issue))
}
