use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Server state, shared references cloned into every request
///
/// | field | type | description |
/// |-------|------|-------------|
/// | config | Config | immutable configuration |
/// | db | Surreal<Db> | embedded database handle |
/// | jwt_service | Arc<JwtService> | token signing/validation |
///
/// This is the only state crossing requests; request handling itself is
/// stateless.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Open the database, apply schema + seed, and assemble the state
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::new(&config.work_dir).await?;
        db_service.seed_admin(config).await?;

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            jwt_service: Arc::new(JwtService::with_config(config.jwt.clone())),
        })
    }
}
