//! JWT Token Service
//!
//! Token generation and validation for the bearer authentication flow.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT Configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC secret (should be at least 32 bytes)
    pub secret: String,
    /// Token expiration time in minutes
    pub expiration_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            #[cfg(debug_assertions)]
            {
                tracing::warn!(
                    "JWT_SECRET not set! Using insecure default key. DO NOT USE IN PRODUCTION!"
                );
                "dev-secret-key-change-in-production-min-32-chars-long".to_string()
            }
            #[cfg(not(debug_assertions))]
            {
                panic!("FATAL: JWT_SECRET environment variable is not set!");
            }
        });

        Self {
            secret,
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(480), // 8 hours
        }
    }
}

/// Claims carried by every token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id ("user:key")
    pub sub: String,
    pub email: String,
    pub nombre: String,
    pub rol: String,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

/// JWT Errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// JWT Token Service
#[derive(Debug, Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new() -> Self {
        Self::with_config(JwtConfig::default())
    }

    pub fn with_config(config: JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            config,
        }
    }

    /// Generate a signed token embedding the user's public identity
    pub fn generate_token(
        &self,
        user_id: impl Into<String>,
        email: impl Into<String>,
        nombre: impl Into<String>,
        rol: impl Into<String>,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: user_id.into(),
            email: email.into(),
            nombre: nombre.into(),
            rol: rol.into(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Validate and decode a token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    _ => JwtError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Extract the raw token from an Authorization header value
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}

/// Current user context extracted from a validated token
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub nombre: String,
    pub rol: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            nombre: claims.nombre,
            rol: claims.rol,
        }
    }
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.rol == "admin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::with_config(JwtConfig {
            secret: "test-secret-key-at-least-32-chars-long!!".to_string(),
            expiration_minutes: 480,
        })
    }

    #[test]
    fn token_round_trip() {
        let service = test_service();

        let token = service
            .generate_token("user:abc", "ana@example.com", "Ana", "mesero")
            .unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.sub, "user:abc");
        assert_eq!(claims.email, "ana@example.com");
        assert_eq!(claims.nombre, "Ana");
        assert_eq!(claims.rol, "mesero");
        assert_eq!(claims.exp - claims.iat, 480 * 60);
    }

    #[test]
    fn tampered_token_rejected() {
        let service = test_service();
        let other = JwtService::with_config(JwtConfig {
            secret: "a-completely-different-32-char-secret!!!!".to_string(),
            expiration_minutes: 480,
        });

        let token = other
            .generate_token("user:abc", "ana@example.com", "Ana", "admin")
            .unwrap();
        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::InvalidSignature)
        ));
    }

    #[test]
    fn bearer_extraction() {
        assert_eq!(JwtService::extract_from_header("Bearer abc.def"), Some("abc.def"));
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
    }

    #[test]
    fn admin_check() {
        let admin = CurrentUser {
            id: "user:1".into(),
            email: "root@example.com".into(),
            nombre: "Root".into(),
            rol: "admin".into(),
        };
        let mesero = CurrentUser {
            rol: "mesero".into(),
            ..admin.clone()
        };
        assert!(admin.is_admin());
        assert!(!mesero.is_admin());
    }
}
