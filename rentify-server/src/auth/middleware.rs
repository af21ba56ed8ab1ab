//! Authorization gate middleware
//!
//! Two layers guard protected routes, applied in this order:
//!
//! 1. [`require_token`] verifies the bearer token and attaches [`CurrentUser`]
//! 2. [`require_role`] reloads the caller's stored role and compares it
//!
//! Per-resource identity checks ([`ensure_same_identity`]) run inside the
//! handler once the path or query email is known.
//!
//! | Failure | Status | Message |
//! |---------|--------|---------|
//! | No Authorization header | 401 | Forbidden Access |
//! | Bad, tampered or expired token | 403 | Invalid or Expired Token |
//! | Stored role missing or different | 403 | forbidden access |
//! | Requested email is not the caller's | 403 | Unauthorized access |

use std::future::Future;
use std::pin::Pin;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::models::Role;

use crate::auth::{AgentGatePolicy, CurrentUser, JwtService, UserDirectory};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// Token gate
///
/// Reads `Authorization`, takes the second space-separated part as the
/// token and verifies it. On success the decoded claims are attached as
/// [`CurrentUser`] and the request continues.
pub async fn require_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(header) = req.headers().get(http::header::AUTHORIZATION) else {
        security_log!("WARN", "auth_missing", uri = req.uri().path().to_string());
        return Err(AppError::unauthenticated());
    };

    let token = header.to_str().ok().and_then(JwtService::extract_from_header);

    match state.jwt_service.verify(token) {
        Ok(claims) => {
            req.extensions_mut().insert(CurrentUser::from(claims));
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = e.to_string(),
                uri = req.uri().path().to_string()
            );
            Err(AppError::invalid_token())
        }
    }
}

type GateFuture = Pin<Box<dyn Future<Output = Result<Response, AppError>> + Send>>;

/// Role gate factory
///
/// Builds a gate that admits the request only if the caller's role, read
/// from the store on this request, equals `role` (after the configured
/// [`AgentGatePolicy`] is applied). Must sit behind [`require_token`].
///
/// ```ignore
/// use axum::middleware;
/// Router::new()
///     .route("/all-users", get(handler::list))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_role(Role::Admin)))
///     .route_layer(middleware::from_fn_with_state(state, require_token));
/// ```
pub fn require_role(
    role: Role,
) -> impl Fn(State<ServerState>, Request, Next) -> GateFuture + Clone + Send + Sync + 'static {
    move |State(state): State<ServerState>, req: Request, next: Next| -> GateFuture {
        Box::pin(async move {
            let email = req
                .extensions()
                .get::<CurrentUser>()
                .map(|user| user.email().to_string())
                .ok_or_else(AppError::unauthenticated)?;

            authorize_role(
                state.users.as_ref(),
                &email,
                role,
                state.config.agent_gate_policy,
            )
            .await?;

            Ok(next.run(req).await)
        })
    }
}

/// Compare the stored role for `email` against `required`
pub async fn authorize_role(
    directory: &dyn UserDirectory,
    email: &str,
    required: Role,
    policy: AgentGatePolicy,
) -> Result<Role, AppError> {
    let expected = policy.effective(required);

    let stored = directory.find_by_email(email).await?.map(|user| user.role);

    match stored {
        Some(role) if role == expected => Ok(role),
        _ => {
            security_log!(
                "WARN",
                "role_denied",
                email = email,
                required_role = expected.as_str(),
                stored_role = stored.map(|r| r.as_str()).unwrap_or("none")
            );
            Err(AppError::forbidden())
        }
    }
}

/// Reject unless `email` is exactly the caller's own
pub fn ensure_same_identity(user: &CurrentUser, email: &str) -> Result<(), AppError> {
    if user.email() == email {
        return Ok(());
    }

    security_log!(
        "WARN",
        "identity_mismatch",
        caller = user.email(),
        requested = email
    );
    Err(AppError::identity_mismatch())
}
