//! Wishlist Repository

use shared::models::WishlistItemCreate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, now_millis, parse_record_id};
use crate::db::models::WishlistItem;

const TABLE: &str = "wishlists";

#[derive(Clone)]
pub struct WishlistRepository {
    base: BaseRepository,
}

impl WishlistRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Vec<WishlistItem>> {
        let items: Vec<WishlistItem> = self
            .base
            .db()
            .query("SELECT * FROM wishlists WHERE email = $email ORDER BY created_at")
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        Ok(items)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<WishlistItem>> {
        let record_id = parse_record_id(TABLE, id)?;
        let item: Option<WishlistItem> = self.base.db().select(record_id).await?;
        Ok(item)
    }

    async fn exists(&self, email: &str, gadget_id: &str) -> RepoResult<bool> {
        let items: Vec<WishlistItem> = self
            .base
            .db()
            .query("SELECT * FROM wishlists WHERE email = $email AND gadget_id = $gadget_id")
            .bind(("email", email.to_string()))
            .bind(("gadget_id", gadget_id.to_string()))
            .await?
            .take(0)?;
        Ok(!items.is_empty())
    }

    /// Save a gadget; a second save of the same gadget is a duplicate
    pub async fn create(&self, email: &str, data: WishlistItemCreate) -> RepoResult<WishlistItem> {
        if self.exists(email, &data.gadget_id).await? {
            return Err(RepoError::Duplicate(format!(
                "Gadget {} is already in the wishlist",
                data.gadget_id
            )));
        }

        let item = WishlistItem::from_create(data, email.to_string(), now_millis());
        let created: Option<WishlistItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to add wishlist item".to_string()))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<WishlistItem> {
        let record_id = parse_record_id(TABLE, id)?;
        let deleted: Option<WishlistItem> = self.base.db().delete(record_id).await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("Wishlist item {} not found", id)))
    }
}
