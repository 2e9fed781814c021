//! Comanda Server - restaurant order management backend
//!
//! # Module structure
//!
//! ```text
//! comanda-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT, middleware, extractor
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # embedded database, models, repositories
//! ├── web/           # embedded admin SPA
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;
pub mod web;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};
pub use utils::logger::init_logger_with_file;

/// Set up the process environment: .env file, configuration and logging
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    let level = if config.is_production() { "info" } else { "debug" };
    init_logger_with_file(level, config.is_production(), config.log_dir.as_deref())?;
    Ok(config)
}
