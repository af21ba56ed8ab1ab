mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::{Router, middleware, routing::get};
use chrono::{Duration, Utc};
use common::{SECRET, TestApp, send_to};
use http::{Method, Request, StatusCode, header};
use rentify_server::auth::{
    AgentGatePolicy, IdentityClaims, JwtConfig, JwtService, UserDirectory, require_role,
    require_token,
};
use rentify_server::db::models::User;
use rentify_server::db::repository::RepoResult;
use serde_json::json;
use shared::models::Role;

fn get_with_header(uri: &str, authorization: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn missing_header_is_401() {
    let app = TestApp::new().await;

    let (status, body) = app.send(Method::GET, "/all-users", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Forbidden Access");
}

#[tokio::test]
async fn garbage_token_is_403() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(Method::GET, "/all-users", Some("garbage"), None)
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Invalid or Expired Token");
}

#[tokio::test]
async fn header_without_token_part_is_403() {
    let app = TestApp::new().await;

    let (status, _) = send_to(&app.router, get_with_header("/all-users", "Bearer")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn token_from_another_secret_is_403() {
    let app = TestApp::new().await;
    app.seed_user("admin@x.com", Role::Admin).await;

    let foreign = JwtService::with_config(JwtConfig::new("a-completely-different-secret-value!!"))
        .issue(&IdentityClaims::new("admin@x.com"))
        .unwrap();

    let (status, body) = app
        .send(Method::GET, "/all-users", Some(&foreign), None)
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Invalid or Expired Token");
}

#[tokio::test]
async fn expired_token_is_403_even_for_admin() {
    let app = TestApp::new().await;
    app.seed_user("admin@x.com", Role::Admin).await;

    let stale = app
        .state
        .jwt_service
        .issue_at(
            &IdentityClaims::new("admin@x.com"),
            Utc::now() - Duration::days(366),
        )
        .unwrap();

    let (status, body) = app.send(Method::GET, "/all-users", Some(&stale), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Invalid or Expired Token");
}

#[tokio::test]
async fn scheme_word_is_not_checked() {
    let app = TestApp::new().await;
    app.seed_user("admin@x.com", Role::Admin).await;
    let token = app.token("admin@x.com");

    let (status, _) = send_to(
        &app.router,
        get_with_header("/all-users", &format!("Token {token}")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn token_endpoint_does_not_require_registration() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/jwt",
            None,
            Some(json!({ "email": "nobody@x.com", "name": "Nobody" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let token = body["token"].as_str().unwrap();
    let claims = JwtService::with_config(JwtConfig::new(SECRET))
        .verify(Some(token))
        .unwrap();
    assert_eq!(claims.email, "nobody@x.com");
    assert_eq!(claims.extra["name"], "Nobody");

    // Valid token, but no stored user: the role gate refuses
    let (status, body) = app.send(Method::GET, "/all-users", Some(token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "forbidden access");
}

#[tokio::test]
async fn role_change_applies_to_existing_token() {
    let app = TestApp::new().await;
    app.seed_user("u@x.com", Role::User).await;
    let token = app.token("u@x.com");

    let (status, _) = app.send(Method::GET, "/all-users", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    app.users().update_role("u@x.com", Role::Admin).await.unwrap();
    let (status, body) = app.send(Method::GET, "/all-users", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    app.users().update_role("u@x.com", Role::User).await.unwrap();
    let (status, _) = app.send(Method::GET, "/all-users", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_promotes_agent_through_api() {
    let app = TestApp::new().await;
    app.seed_user("admin@x.com", Role::Admin).await;
    app.seed_user("a@x.com", Role::User).await;
    let admin = app.token("admin@x.com");
    let agent = app.token("a@x.com");

    let gadget = json!({ "name": "Drone", "category": "Drones", "price_per_day": 15 });
    let (status, _) = app
        .send(Method::POST, "/gadgets", Some(&agent), Some(gadget.clone()))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .send(
            Method::PATCH,
            "/users/role/a@x.com",
            Some(&admin),
            Some(json!({ "role": "Agent" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "Agent");

    let (status, _) = app
        .send(Method::POST, "/gadgets", Some(&agent), Some(gadget))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn roles_are_exact_matches() {
    let app = TestApp::new().await;
    app.seed_user("admin@x.com", Role::Admin).await;
    app.seed_user("agent@x.com", Role::Agent).await;

    let gadget = json!({ "name": "Drone", "category": "Drones", "price_per_day": 15 });

    let admin = app.token("admin@x.com");
    let (status, _) = app
        .send(Method::POST, "/gadgets", Some(&admin), Some(gadget))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let agent = app.token("agent@x.com");
    let (status, _) = app.send(Method::GET, "/all-users", Some(&agent), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn legacy_policy_admits_admins_to_agent_routes() {
    let app = TestApp::with_policy(AgentGatePolicy::LegacyAdminFlag).await;
    app.seed_user("admin@x.com", Role::Admin).await;
    app.seed_user("agent@x.com", Role::Agent).await;

    let gadget = json!({ "name": "Drone", "category": "Drones", "price_per_day": 15 });

    let agent = app.token("agent@x.com");
    let (status, _) = app
        .send(Method::POST, "/gadgets", Some(&agent), Some(gadget.clone()))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin = app.token("admin@x.com");
    let (status, body) = app
        .send(Method::POST, "/gadgets", Some(&admin), Some(gadget))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["owner_email"], "admin@x.com");
}

#[tokio::test]
async fn identity_check_rejects_other_emails() {
    let app = TestApp::new().await;
    app.seed_user("a@x.com", Role::Admin).await;
    app.seed_user("b@x.com", Role::Admin).await;
    let token = app.token("a@x.com");

    let (status, body) = app
        .send(Method::GET, "/users/admin/a@x.com", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["admin"], true);

    let (status, body) = app
        .send(Method::GET, "/users/admin/b@x.com", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Unauthorized access");

    let (status, _) = app
        .send(Method::GET, "/users/admin/b@x.com", None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn role_queries_report_stored_role() {
    let app = TestApp::new().await;
    app.seed_user("agent@x.com", Role::Agent).await;
    let token = app.token("agent@x.com");

    let (_, body) = app
        .send(Method::GET, "/users/agent/agent@x.com", Some(&token), None)
        .await;
    assert_eq!(body["agent"], true);

    let (_, body) = app
        .send(Method::GET, "/users/admin/agent@x.com", Some(&token), None)
        .await;
    assert_eq!(body["admin"], false);

    let (_, body) = app
        .send(Method::GET, "/users/role/agent@x.com", Some(&token), None)
        .await;
    assert_eq!(body["role"], "Agent");
}

/// Router with a counting handler behind the token and Admin gates
fn counting_router(app: &TestApp, hits: Arc<AtomicUsize>) -> Router {
    Router::new()
        .route(
            "/probe",
            get(move || {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    "ok"
                }
            }),
        )
        .route_layer(middleware::from_fn_with_state(
            app.state.clone(),
            require_role(Role::Admin),
        ))
        .route_layer(middleware::from_fn_with_state(
            app.state.clone(),
            require_token,
        ))
        .with_state(app.state.clone())
}

#[tokio::test]
async fn handler_runs_once_and_only_when_admitted() {
    let app = TestApp::new().await;
    app.seed_user("admin@x.com", Role::Admin).await;
    app.seed_user("u@x.com", Role::User).await;

    let hits = Arc::new(AtomicUsize::new(0));
    let router = counting_router(&app, hits.clone());

    let rejected = [
        Request::builder().uri("/probe").body(Body::empty()).unwrap(),
        get_with_header("/probe", "Bearer garbage"),
        get_with_header("/probe", &format!("Bearer {}", app.token("u@x.com"))),
    ];
    for request in rejected {
        let (status, _) = send_to(&router, request).await;
        assert_ne!(status, StatusCode::OK);
    }
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    let admin = format!("Bearer {}", app.token("admin@x.com"));
    let (status, body) = send_to(&router, get_with_header("/probe", &admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

/// Directory wrapper counting role lookups
struct CountingDirectory {
    inner: rentify_server::db::repository::UserRepository,
    lookups: AtomicUsize,
}

#[async_trait::async_trait]
impl UserDirectory for CountingDirectory {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        UserDirectory::find_by_email(&self.inner, email).await
    }
}

#[tokio::test]
async fn role_is_looked_up_on_every_request() {
    let app = TestApp::new().await;
    app.seed_user("admin@x.com", Role::Admin).await;

    let directory = Arc::new(CountingDirectory {
        inner: app.users(),
        lookups: AtomicUsize::new(0),
    });
    let state = app.state.clone().with_user_directory(directory.clone());
    let router = rentify_server::api::router(state);
    let token = format!("Bearer {}", app.token("admin@x.com"));

    for _ in 0..2 {
        let (status, _) = send_to(&router, get_with_header("/all-users", &token)).await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(directory.lookups.load(Ordering::SeqCst), 2);

    // Rejected by the token gate: the store is never consulted
    let (status, _) = send_to(&router, get_with_header("/all-users", "Bearer nope")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(directory.lookups.load(Ordering::SeqCst), 2);
}
