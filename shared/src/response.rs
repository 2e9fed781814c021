//! API response envelope
//!
//! Every endpoint answers with the same shape:
//!
//! ```json
//! {
//!     "ok": true,
//!     "data": { ... },
//!     "message": "producto creado exitosamente"
//! }
//! ```
//!
//! Failures carry `ok: false` and an empty-string `data`, which is what the
//! deployed clients expect.

use serde::{Deserialize, Serialize};

/// Unified API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub ok: bool,
    /// Response payload (empty string on failure)
    pub data: T,
    /// Human-readable message
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            data,
            message: message.into(),
        }
    }
}

impl ApiResponse<serde_json::Value> {
    /// Create an error response; `data` is the empty string the wire
    /// contract mandates, not `null`
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: serde_json::Value::String(String::new()),
            message: message.into(),
        }
    }
}
