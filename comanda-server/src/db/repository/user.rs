//! User Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{User, UserCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const USER_TABLE: &str = "user";

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

    /// Find a user by email. Callers must pass the email already
    /// lowercased/trimmed; rows are stored normalized.
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let record_id = match parse_record_id(USER_TABLE, id) {
            Ok(rid) => rid,
            Err(RepoError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };
        let user: Option<User> = self.base.db().select(record_id).await?;
        Ok(user)
    }

    /// All users, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<User>> {
        let users: Vec<User> = self
            .base
            .db()
            .query("SELECT * FROM user ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(users)
    }

    /// Create a user row. The password is hashed here; plaintext never
    /// reaches the database.
    pub async fn create(&self, data: UserCreate) -> RepoResult<User> {
        let password_hash = User::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {}", e)))?;

        let mut result = self
            .base
            .db()
            .query(
                "CREATE user SET email = $email, password_hash = $password_hash, \
                 nombre = $nombre, rol = $rol, activo = true, created_at = $created_at",
            )
            .bind(("email", data.email.trim().to_lowercase()))
            .bind(("password_hash", password_hash))
            .bind(("nombre", data.nombre))
            .bind(("rol", data.rol))
            .bind((
                "created_at",
                chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            ))
            .await?;

        let users: Vec<User> = result.take(0)?;
        users
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }
}
