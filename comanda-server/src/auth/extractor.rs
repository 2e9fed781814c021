//! JWT Extractor
//!
//! Lets protected handlers take `CurrentUser` as an argument; validation
//! happens on extraction unless the auth middleware already ran.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Already extracted by the middleware
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match auth_header {
            Some(header) => {
                JwtService::extract_from_header(header).ok_or(AppError::InvalidToken)?
            }
            None => {
                tracing::warn!(uri = %parts.uri, "Request without bearer token");
                return Err(AppError::Unauthorized);
            }
        };

        match state.jwt_service.validate_token(token) {
            Ok(claims) => {
                let user = CurrentUser::from(claims);
                // Cache for downstream extractions
                parts.extensions.insert(user.clone());
                Ok(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, uri = %parts.uri, "Token validation failed");
                match e {
                    JwtError::ExpiredToken => Err(AppError::TokenExpired),
                    _ => Err(AppError::InvalidToken),
                }
            }
        }
    }
}
