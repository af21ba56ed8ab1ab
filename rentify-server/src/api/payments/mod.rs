//! Payment routes
//!
//! | Path | Method | Gate |
//! |------|--------|------|
//! | /create-payment-intent | POST | token |
//! | /payments | POST | token |
//! | /payments/{email} | GET | token + same identity |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use super::token_gated;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    token_gated(
        Router::new()
            .route("/create-payment-intent", post(handler::create_intent))
            .route("/payments", post(handler::record))
            .route("/payments/{email}", get(handler::history)),
        state,
    )
}
