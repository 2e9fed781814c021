//! Shared types for Comanda
//!
//! Wire-level types used by both the server and API clients: the response
//! envelope and the request/response DTOs for auth, products and orders.

pub mod client;
pub mod response;

// Re-exports
pub use client::{
    LoginRequest, LoginResponse, OrderItemRequest, OrderPayload, OrderSearchQuery, ProductCreate,
    ProductSearchQuery, ProductUpdate, UserInfo,
};
pub use response::ApiResponse;
