//! Repository Module
//!
//! CRUD operations over the SurrealDB tables.

pub mod cart;
pub mod gadget;
pub mod payment;
pub mod user;
pub mod wishlist;

pub use cart::CartRepository;
pub use gadget::GadgetRepository;
pub use payment::PaymentRepository;
pub use user::UserRepository;
pub use wishlist::WishlistRepository;

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

use crate::utils::{AppError, ErrorCode};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // Unique index violations surface as "... already contains ..."
        if msg.contains("already contains") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// IDs travel as "table:key" strings. A bare key is accepted too and is
// resolved against the repository's own table.

/// Resolve `raw` to a record in `table`
pub fn parse_record_id(table: &str, raw: &str) -> RepoResult<RecordId> {
    if raw.is_empty() {
        return Err(RepoError::Validation("empty record id".to_string()));
    }

    if raw.contains(':') {
        let id: RecordId = raw
            .parse()
            .map_err(|_| RepoError::Validation(format!("invalid record id: {raw}")))?;
        if id.table() != table {
            return Err(RepoError::Validation(format!(
                "record id {raw} does not belong to {table}"
            )));
        }
        return Ok(id);
    }

    Ok(RecordId::from_table_key(table, raw))
}

/// Current time in Unix millis
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
