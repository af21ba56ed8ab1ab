//! User Repository

use async_trait::async_trait;
use shared::models::{Role, UserCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, now_millis};
use crate::auth::UserDirectory;
use crate::db::models::User;

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All users, oldest first
    pub async fn find_all(&self) -> RepoResult<Vec<User>> {
        let users: Vec<User> = self
            .base
            .db()
            .query("SELECT * FROM users ORDER BY created_at")
            .await?
            .take(0)?;
        Ok(users)
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM users WHERE email = $email")
            .bind(("email", email.to_string()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Register a new user with `role`
    pub async fn create(&self, data: UserCreate, role: Role) -> RepoResult<User> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "User '{}' already exists",
                data.email
            )));
        }

        let user = User {
            role,
            ..User::new(data.email, data.name, data.photo, now_millis())
        };
        let created: Option<User> = self.base.db().create("users").content(user).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    /// Change the stored role; the next gated request sees it
    pub async fn update_role(&self, email: &str, role: Role) -> RepoResult<User> {
        let mut result = self
            .base
            .db()
            .query("UPDATE users SET role = $role WHERE email = $email RETURN AFTER")
            .bind(("email", email.to_string()))
            .bind(("role", role))
            .await?;
        let users: Vec<User> = result.take(0)?;
        users
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("User {} not found", email)))
    }

    pub async fn delete_by_email(&self, email: &str) -> RepoResult<User> {
        let mut result = self
            .base
            .db()
            .query("DELETE users WHERE email = $email RETURN BEFORE")
            .bind(("email", email.to_string()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        users
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("User {} not found", email)))
    }
}

#[async_trait]
impl UserDirectory for UserRepository {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        UserRepository::find_by_email(self, email).await
    }
}
