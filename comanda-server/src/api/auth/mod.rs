//! Authentication Routes
//!
//! - /api/auth/login: public
//! - /api/auth/verify, /api/auth/profile: bearer token (global require_auth)
//! - /api/auth/users: bearer token + admin role

mod handler;

use axum::{Router, middleware as axum_middleware, routing::get, routing::post};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/verify", get(handler::verify))
        .route("/api/auth/profile", get(handler::profile))
        .route(
            "/api/auth/users",
            get(handler::list_users).route_layer(axum_middleware::from_fn(require_admin)),
        )
}
