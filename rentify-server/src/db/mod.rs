//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine) and the schema it is opened with.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Table and index definitions applied on every start
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS users SCHEMALESS;
DEFINE INDEX IF NOT EXISTS users_email ON TABLE users FIELDS email UNIQUE;
DEFINE TABLE IF NOT EXISTS gadgets SCHEMALESS;
DEFINE INDEX IF NOT EXISTS gadgets_owner ON TABLE gadgets FIELDS owner_email;
DEFINE INDEX IF NOT EXISTS gadgets_category ON TABLE gadgets FIELDS category;
DEFINE TABLE IF NOT EXISTS carts SCHEMALESS;
DEFINE INDEX IF NOT EXISTS carts_email ON TABLE carts FIELDS email;
DEFINE TABLE IF NOT EXISTS wishlists SCHEMALESS;
DEFINE INDEX IF NOT EXISTS wishlists_email_gadget ON TABLE wishlists FIELDS email, gadget_id UNIQUE;
DEFINE TABLE IF NOT EXISTS payments SCHEMALESS;
DEFINE INDEX IF NOT EXISTS payments_email ON TABLE payments FIELDS email;
"#;

/// Database service - owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `db_path` and apply the schema
    pub async fn new(db_path: &str, namespace: &str, database: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(path = %db_path, namespace, database, "Database connection established");

        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;
        tracing::info!("Database schema applied");

        Ok(Self { db })
    }
}
