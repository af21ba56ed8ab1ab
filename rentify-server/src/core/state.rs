use std::sync::Arc;

use shared::models::Role;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::{JwtService, UserDirectory};
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{RepoError, UserRepository};
use crate::payments::{PaymentGateway, StripeGateway};
use crate::security_log;
use crate::utils::AppError;

/// Server state shared by every handler and middleware
///
/// Cloning is cheap: the database handle and services are reference counted.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub jwt_service: Arc<JwtService>,
    /// Role lookups for the role gate
    pub users: Arc<dyn UserDirectory>,
    pub payments: Arc<dyn PaymentGateway>,
}

impl ServerState {
    /// Assemble state from already-built parts
    pub fn new(config: Config, db: Surreal<Db>, payments: Arc<dyn PaymentGateway>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let users: Arc<dyn UserDirectory> = Arc::new(UserRepository::new(db.clone()));

        Self {
            config,
            db,
            jwt_service,
            users,
            payments,
        }
    }

    /// Open the database and wire up production services
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        if let Some(parent) = std::path::Path::new(&config.database_path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::internal(format!("Failed to create database directory: {e}"))
            })?;
        }

        let db_service =
            DbService::new(&config.database_path, &config.db_namespace, &config.db_name).await?;
        let payments: Arc<dyn PaymentGateway> =
            Arc::new(StripeGateway::new(config.stripe_secret_key.clone()));

        tracing::info!(
            environment = %config.environment,
            agent_gate_policy = %config.agent_gate_policy,
            "Server state initialized"
        );

        let state = Self::new(config.clone(), db_service.db, payments);
        state.bootstrap_admin().await?;
        Ok(state)
    }

    /// Promote the configured `ADMIN_EMAIL` if that user is already registered
    ///
    /// A not-yet-registered admin is promoted at registration instead.
    pub async fn bootstrap_admin(&self) -> Result<(), AppError> {
        let Some(email) = self.config.admin_email.as_deref() else {
            return Ok(());
        };

        match UserRepository::new(self.db.clone())
            .update_role(email, Role::Admin)
            .await
        {
            Ok(_) => {
                security_log!("INFO", "admin_bootstrap", email = email);
                Ok(())
            }
            Err(RepoError::NotFound(_)) => {
                tracing::info!(email = %email, "Bootstrap admin not registered yet");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the role directory (tests count or stub lookups through this)
    pub fn with_user_directory(mut self, users: Arc<dyn UserDirectory>) -> Self {
        self.users = users;
        self
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
