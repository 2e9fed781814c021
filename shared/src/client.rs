//! Request/response DTOs shared between server and client
//!
//! Field names follow the deployed wire contract, which is Spanish
//! (`nombre`, `precio`, `productos`, ...). Search parameters arrive as
//! query strings, so every filter is optional and numeric bounds are
//! accepted as strings too (`?precioMin=10` parses either way).

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login response data: public profile fields plus the signed token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: String,
    pub email: String,
    pub nombre: String,
    pub rol: String,
    pub token: String,
}

/// Public user fields carried in the token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub nombre: String,
    pub rol: String,
}

// =============================================================================
// Product API DTOs
// =============================================================================

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    #[serde(default)]
    pub nombre: String,
    pub precio: Option<f64>,
}

/// Partial product update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio: Option<f64>,
}

/// Product search filters (`GET /api/products/search`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchQuery {
    pub nombre: Option<String>,
    pub precio_min: Option<f64>,
    pub precio_max: Option<f64>,
    pub ordenar: Option<String>,
    pub direccion: Option<String>,
}

// =============================================================================
// Order API DTOs
// =============================================================================

/// One requested line: product id plus optional quantity (defaults to 1)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub id: String,
    pub cantidad: Option<i64>,
}

/// Create/update order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPayload {
    #[serde(default)]
    pub productos: Vec<OrderItemRequest>,
}

/// Order search filters (`GET /api/orders/search`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSearchQuery {
    pub total_min: Option<f64>,
    pub total_max: Option<f64>,
    pub fecha_inicio: Option<String>,
    pub fecha_fin: Option<String>,
    pub producto_nombre: Option<String>,
    pub ordenar: Option<String>,
    pub direccion: Option<String>,
}
