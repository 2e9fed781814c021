//! Database Module
//!
//! Owns the embedded SurrealDB (RocksDB-backed) instance: opening,
//! schema definitions and the startup admin seed.

pub mod models;
pub mod repository;

use crate::core::Config;
use crate::utils::AppError;
use models::{Rol, UserCreate};
use repository::UserRepository;
use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const DB_NAMESPACE: &str = "comanda";
const DB_NAME: &str = "comanda";

/// Database service owning the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (creating if missing) the database under `{work_dir}/db`
    pub async fn new(work_dir: &str) -> Result<Self, AppError> {
        let path = Path::new(work_dir).join("db");
        let db: Surreal<Db> = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

        db.use_ns(DB_NAMESPACE)
            .use_db(DB_NAME)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {}", e)))?;

        define_schema(&db).await?;

        tracing::info!("Database connection established (embedded SurrealDB)");

        Ok(Self { db })
    }

    /// Create the seed admin user when configured and absent.
    ///
    /// User administration is out of band; this is the only path that
    /// writes to the user table from inside the server.
    pub async fn seed_admin(&self, config: &Config) -> Result<(), AppError> {
        let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
            return Ok(());
        };

        let repo = UserRepository::new(self.db.clone());
        let email = email.trim().to_lowercase();
        let existing = repo
            .find_by_email(&email)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        if existing.is_some() {
            return Ok(());
        }

        repo.create(UserCreate {
            email: email.clone(),
            password: password.clone(),
            nombre: config.admin_nombre.clone(),
            rol: Rol::Admin,
        })
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

        tracing::info!(email = %email, "Seeded admin user");
        Ok(())
    }
}

/// Schema definitions. Tables stay schemaless; only the unique email
/// index is enforced at the storage layer.
async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query("DEFINE INDEX IF NOT EXISTS user_email_unique ON TABLE user FIELDS email UNIQUE")
        .await
        .map_err(|e| AppError::database(format!("Failed to define schema: {}", e)))?;
    Ok(())
}
