//! Unified error handling
//!
//! Application-level error enum mapped onto the `{ok, data, message}`
//! envelope at the HTTP boundary.
//!
//! | variant | status |
//! |---------|--------|
//! | Validation | 400 |
//! | Unauthorized / TokenExpired / InvalidToken | 401 |
//! | Forbidden | 403 |
//! | NotFound | 404 |
//! | Database / Internal | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::ApiResponse;
use tracing::error;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Authentication errors (401) ==========
    #[error("token no proporcionado")]
    Unauthorized,

    #[error("token expirado")]
    TokenExpired,

    #[error("token invalido")]
    InvalidToken,

    #[error("credenciales invalidas")]
    InvalidCredentials,

    // ========== Authorization errors (403) ==========
    #[error("{0}")]
    Forbidden(String),

    // ========== Business errors (4xx) ==========
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    // ========== System errors (500) ==========
    #[error("{0}")]
    Database(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Unified message for unknown user or bad password, prevents user
    /// enumeration during login
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Unauthorized
            | AppError::TokenExpired
            | AppError::InvalidToken
            | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Message passes through verbatim, including 500s
        let body = Json(ApiResponse::err(self.to_string()));
        (status, body).into_response()
    }
}

/// Result type for handlers and services
pub type AppResult<T> = Result<T, AppError>;

// ========== Helper functions ==========

/// Create a successful envelope response
pub fn ok<T: serde::Serialize>(
    data: T,
    message: impl Into<String>,
) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok(data, message))
}
