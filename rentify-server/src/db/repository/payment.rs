//! Payment Repository

use shared::models::PaymentCreate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, now_millis};
use crate::db::models::Payment;

const TABLE: &str = "payments";

#[derive(Clone)]
pub struct PaymentRepository {
    base: BaseRepository,
}

impl PaymentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Payment history for one user, newest first
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Vec<Payment>> {
        let payments: Vec<Payment> = self
            .base
            .db()
            .query("SELECT * FROM payments WHERE email = $email ORDER BY created_at DESC")
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        Ok(payments)
    }

    pub async fn create(&self, email: &str, data: PaymentCreate) -> RepoResult<Payment> {
        let payment = Payment::from_create(data, email.to_string(), now_millis());
        let created: Option<Payment> = self.base.db().create(TABLE).content(payment).await?;
        created.ok_or_else(|| RepoError::Database("Failed to record payment".to_string()))
    }
}
