//! API routing
//!
//! # Structure
//!
//! - [`auth`] - login, token verification, profile, user listing
//! - [`products`] - product CRUD + search
//! - [`orders`] - order CRUD + search
//! - [`health`] - liveness endpoint

use axum::Router;
use axum::middleware as axum_middleware;
use http::HeaderValue;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth::require_auth;
use crate::core::ServerState;
use crate::web;

pub mod auth;
pub mod health;
pub mod orders;
pub mod products;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(auth::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(health::router())
        // Embedded admin SPA (fallback so /api keeps priority)
        .fallback(web::static_handler)
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // Token check for the protected API slice
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ))
        // Deployed clients call from arbitrary origins
        .layer(CorsLayer::permissive())
        // Request logging
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(XRequestId))
        .with_state(state)
}
