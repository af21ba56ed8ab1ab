//! Cart Repository

use shared::models::CartItemCreate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, now_millis, parse_record_id};
use crate::db::models::CartItem;

const TABLE: &str = "carts";

#[derive(Clone)]
pub struct CartRepository {
    base: BaseRepository,
}

impl CartRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Vec<CartItem>> {
        let items: Vec<CartItem> = self
            .base
            .db()
            .query("SELECT * FROM carts WHERE email = $email ORDER BY created_at")
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        Ok(items)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<CartItem>> {
        let record_id = parse_record_id(TABLE, id)?;
        let item: Option<CartItem> = self.base.db().select(record_id).await?;
        Ok(item)
    }

    pub async fn create(&self, email: &str, data: CartItemCreate) -> RepoResult<CartItem> {
        let item = CartItem::from_create(data, email.to_string(), now_millis());
        let created: Option<CartItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to add cart item".to_string()))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<CartItem> {
        let record_id = parse_record_id(TABLE, id)?;
        let deleted: Option<CartItem> = self.base.db().delete(record_id).await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("Cart item {} not found", id)))
    }
}
