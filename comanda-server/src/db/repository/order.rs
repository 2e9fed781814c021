//! Order Repository
//!
//! Orders are written as a whole: one row holding the snapshot line array
//! and the precomputed total. Updates replace both.

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Order, OrderLine};
use shared::OrderSearchQuery;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const ORDER_TABLE: &str = "order";

/// Fields `ordenar` may sort by; anything else falls back to created_at
const ORDER_ORDER_FIELDS: &[&str] = &["total", "created_at"];

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a new order row (snapshot lines + total)
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// All orders, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let record_id = match parse_record_id(ORDER_TABLE, id) {
            Ok(rid) => rid,
            Err(RepoError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };
        let order: Option<Order> = self.base.db().select(record_id).await?;
        Ok(order)
    }

    /// Fully replace an order's line snapshot and total.
    /// `created_at` is untouched.
    pub async fn replace_items(
        &self,
        id: &str,
        productos: Vec<OrderLine>,
        total: f64,
    ) -> RepoResult<Order> {
        let record_id = parse_record_id(ORDER_TABLE, id)?;

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET productos = $productos, total = $total RETURN AFTER")
            .bind(("thing", record_id))
            .bind(("productos", productos))
            .bind(("total", total))
            .await?;

        let orders: Vec<Order> = result.take(0)?;
        orders
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Search with inclusive total bounds and created_at range. The
    /// `productoNombre` line filter is NOT applied here; it runs in memory
    /// over this result set (the snapshot's stored form has no column to
    /// predicate on).
    pub async fn search(&self, params: &OrderSearchQuery) -> RepoResult<Vec<Order>> {
        let mut where_parts: Vec<&str> = Vec::new();
        if params.total_min.is_some() {
            where_parts.push("total >= $total_min");
        }
        if params.total_max.is_some() {
            where_parts.push("total <= $total_max");
        }
        if params.fecha_inicio.is_some() {
            where_parts.push("created_at >= $fecha_inicio");
        }
        if params.fecha_fin.is_some() {
            where_parts.push("created_at <= $fecha_fin");
        }

        let order_field = params
            .ordenar
            .as_deref()
            .filter(|f| ORDER_ORDER_FIELDS.contains(f))
            .unwrap_or("created_at");
        let direction = if params.direccion.as_deref() == Some("asc") {
            "ASC"
        } else {
            "DESC"
        };

        let mut query_str = String::from("SELECT * FROM order");
        if !where_parts.is_empty() {
            query_str.push_str(" WHERE ");
            query_str.push_str(&where_parts.join(" AND "));
        }
        query_str.push_str(&format!(" ORDER BY {} {}", order_field, direction));

        let mut query = self.base.db().query(query_str);
        if let Some(v) = params.total_min {
            query = query.bind(("total_min", v));
        }
        if let Some(v) = params.total_max {
            query = query.bind(("total_max", v));
        }
        if let Some(v) = &params.fecha_inicio {
            query = query.bind(("fecha_inicio", v.clone()));
        }
        if let Some(v) = &params.fecha_fin {
            query = query.bind(("fecha_fin", v.clone()));
        }

        let orders: Vec<Order> = query.await?.take(0)?;
        Ok(orders)
    }
}
