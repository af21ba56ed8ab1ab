//! Test harness: the full router over a throwaway embedded database

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use rentify_server::api;
use rentify_server::auth::{AgentGatePolicy, IdentityClaims};
use rentify_server::db::DbService;
use rentify_server::db::repository::UserRepository;
use rentify_server::payments::{PaymentError, PaymentGateway};
use rentify_server::{Config, ServerState};
use serde_json::{Value, json};
use shared::models::Role;
use tempfile::TempDir;
use tower::ServiceExt;

pub const SECRET: &str = "integration-test-secret-of-32-plus-chars";

/// Payment gateway that never leaves the process
#[derive(Default)]
pub struct FakeGateway {
    pub calls: Mutex<Vec<(i64, String)>>,
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<String, PaymentError> {
        self.calls
            .lock()
            .unwrap()
            .push((amount_minor, currency.to_string()));
        Ok(format!("pi_test_{amount_minor}_secret"))
    }
}

pub struct TestApp {
    pub state: ServerState,
    pub router: Router,
    pub payments: Arc<FakeGateway>,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_policy(AgentGatePolicy::Strict).await
    }

    pub async fn with_policy(policy: AgentGatePolicy) -> Self {
        Self::with_config(|config| config.with_agent_gate_policy(policy)).await
    }

    pub async fn with_admin_email(email: &str) -> Self {
        Self::with_config(|config| config.with_admin_email(email)).await
    }

    pub async fn with_config(configure: impl FnOnce(Config) -> Config) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rentify.db");
        let config = configure(Config::development(path.to_string_lossy(), SECRET));

        let db = DbService::new(&config.database_path, &config.db_namespace, &config.db_name)
            .await
            .expect("open database");

        let payments = Arc::new(FakeGateway::default());
        let state = ServerState::new(config, db.db, payments.clone());
        let router = api::router(state.clone());

        Self {
            state,
            router,
            payments,
            _dir: dir,
        }
    }

    pub fn token(&self, email: &str) -> String {
        self.state
            .jwt_service
            .issue(&IdentityClaims::new(email))
            .expect("issue token")
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.state.db.clone())
    }

    /// Register `email` and give it `role` directly in the store
    pub async fn seed_user(&self, email: &str, role: Role) {
        let (status, _) = self
            .send(Method::POST, "/users", None, Some(json!({ "email": email })))
            .await;
        assert_eq!(status, StatusCode::OK, "register {email}");
        if role != Role::User {
            self.users().update_role(email, role).await.expect("set role");
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        send_to(&self.router, request).await
    }
}

/// Drive `router` with one request and decode the body as JSON (or text)
pub async fn send_to(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.expect("oneshot");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}
