use crate::auth::JwtConfig;

/// Server configuration
///
/// Every item can be overridden through environment variables:
///
/// | variable | default | description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./data | database and runtime files |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| production |
/// | JWT_SECRET | (dev fallback) | HMAC signing secret |
/// | JWT_EXPIRATION_MINUTES | 480 | token lifetime |
/// | LOG_DIR | (console) | daily-rolling log file directory |
/// | ADMIN_EMAIL / ADMIN_PASSWORD / ADMIN_NOMBRE | – | startup admin seed |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the embedded database
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// development | production
    pub environment: String,
    /// Optional log file directory
    pub log_dir: Option<String>,

    // === Admin seed (user administration is otherwise out of band) ===
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
    pub admin_nombre: String,
}

impl Config {
    /// Load configuration from environment variables, using defaults for
    /// anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
            admin_nombre: std::env::var("ADMIN_NOMBRE")
                .unwrap_or_else(|_| "Administrador".into()),
        }
    }

    /// Override the paths and port, keeping everything else from the
    /// environment. Used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
