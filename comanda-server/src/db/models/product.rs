//! Product Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Product ID type
pub type ProductId = RecordId;

/// Product row. Prices are plain JSON numbers on the wire; there is no
/// delete operation for products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ProductId>,
    pub nombre: String,
    /// Always > 0, enforced at the handler boundary
    pub precio: f64,
    #[serde(with = "serde_helpers::datetime_rfc3339")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(nombre: String, precio: f64) -> Self {
        Self {
            id: None,
            nombre,
            precio,
            created_at: Utc::now(),
        }
    }
}
