//! Repository Module
//!
//! Table-scoped query/insert/update operations against the embedded
//! SurrealDB instance. No repository spans more than one statement per
//! call; there is no transaction wrapping read-modify-write sequences.

// Auth
pub mod user;

// Catalog
pub mod product;

// Orders
pub mod order;

// Re-exports
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use user::UserRepository;

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

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

/// Parse a loose id ("key" or "table:key") into a RecordId for `table`.
///
/// An id carrying a different table prefix never matches a row of `table`,
/// so it maps to NotFound rather than a parse error.
pub fn parse_record_id(table: &str, id: &str) -> RepoResult<RecordId> {
    match id.split_once(':') {
        None => Ok(RecordId::from_table_key(table, id)),
        Some((t, key)) if t == table && !key.is_empty() => {
            Ok(RecordId::from_table_key(table, key))
        }
        Some(_) => Err(RepoError::NotFound(format!("{} {}", table, id))),
    }
}
