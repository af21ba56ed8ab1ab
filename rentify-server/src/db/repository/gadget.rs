//! Gadget Repository

use shared::models::{GadgetCreate, GadgetQuery, GadgetUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, now_millis, parse_record_id};
use crate::db::models::{Gadget, GadgetPatch};

const TABLE: &str = "gadgets";

#[derive(Clone)]
pub struct GadgetRepository {
    base: BaseRepository,
}

impl GadgetRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// List gadgets, newest first, optionally filtered by category and owner
    pub async fn find_all(&self, filter: &GadgetQuery) -> RepoResult<Vec<Gadget>> {
        let mut conditions = Vec::new();
        if filter.category.is_some() {
            conditions.push("category = $category");
        }
        if filter.owner_email.is_some() {
            conditions.push("owner_email = $owner_email");
        }

        let mut sql = String::from("SELECT * FROM gadgets");
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY created_at DESC");

        let mut query = self.base.db().query(sql);
        if let Some(category) = &filter.category {
            query = query.bind(("category", category.clone()));
        }
        if let Some(owner) = &filter.owner_email {
            query = query.bind(("owner_email", owner.clone()));
        }

        let gadgets: Vec<Gadget> = query.await?.take(0)?;
        Ok(gadgets)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Gadget>> {
        let record_id = parse_record_id(TABLE, id)?;
        let gadget: Option<Gadget> = self.base.db().select(record_id).await?;
        Ok(gadget)
    }

    pub async fn create(&self, owner_email: &str, data: GadgetCreate) -> RepoResult<Gadget> {
        let gadget = Gadget::from_create(data, owner_email.to_string(), now_millis());
        let created: Option<Gadget> = self.base.db().create(TABLE).content(gadget).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create gadget".to_string()))
    }

    /// Merge the supplied fields into an existing gadget
    pub async fn update(&self, id: &str, data: GadgetUpdate) -> RepoResult<Gadget> {
        let record_id = parse_record_id(TABLE, id)?;
        let patch = GadgetPatch::from_update(data, now_millis());

        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", record_id))
            .bind(("data", patch))
            .await?
            .check()?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Gadget {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Gadget> {
        let record_id = parse_record_id(TABLE, id)?;
        let deleted: Option<Gadget> = self.base.db().delete(record_id).await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("Gadget {} not found", id)))
    }
}
