//! Order Model
//!
//! Orders embed a snapshot of each product line as it looked at write
//! time. The snapshot is not a record link: editing a product later never
//! changes a past order.

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Order ID type
pub type OrderId = RecordId;

/// Immutable snapshot of one ordered product line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product id at snapshot time, as a "product:key" string
    pub id: String,
    pub nombre: String,
    pub precio: f64,
    pub cantidad: i64,
}

impl OrderLine {
    pub fn subtotal(&self) -> f64 {
        self.precio * self.cantidad as f64
    }
}

/// Order row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<OrderId>,
    pub productos: Vec<OrderLine>,
    /// Always Σ precio×cantidad over `productos`
    pub total: f64,
    #[serde(with = "serde_helpers::datetime_rfc3339")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(productos: Vec<OrderLine>) -> Self {
        let total = productos.iter().map(OrderLine::subtotal).sum();
        Self {
            id: None,
            productos,
            total,
            created_at: Utc::now(),
        }
    }
}
