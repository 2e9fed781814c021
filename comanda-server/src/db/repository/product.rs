//! Product Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::Product;
use shared::ProductSearchQuery;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const PRODUCT_TABLE: &str = "product";

/// Fields `ordenar` may sort by; anything else falls back to created_at
const PRODUCT_ORDER_FIELDS: &[&str] = &["nombre", "precio", "created_at"];

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new product
    pub async fn create(&self, product: Product) -> RepoResult<Product> {
        let created: Option<Product> = self
            .base
            .db()
            .create(PRODUCT_TABLE)
            .content(product)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// All products, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(products)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let record_id = match parse_record_id(PRODUCT_TABLE, id) {
            Ok(rid) => rid,
            Err(RepoError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };
        let product: Option<Product> = self.base.db().select(record_id).await?;
        Ok(product)
    }

    /// Partial update. Only the provided fields are touched; errors with
    /// NotFound when the id does not match a row.
    pub async fn update(
        &self,
        id: &str,
        nombre: Option<String>,
        precio: Option<f64>,
    ) -> RepoResult<Product> {
        let record_id = parse_record_id(PRODUCT_TABLE, id)?;

        // Build dynamic SET clauses with typed bindings
        let mut set_parts: Vec<&str> = Vec::new();
        if nombre.is_some() {
            set_parts.push("nombre = $nombre");
        }
        if precio.is_some() {
            set_parts.push("precio = $precio");
        }

        if set_parts.is_empty() {
            // No fields to update
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)));
        }

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self.base.db().query(query_str).bind(("thing", record_id));
        if let Some(v) = nombre {
            query = query.bind(("nombre", v));
        }
        if let Some(v) = precio {
            query = query.bind(("precio", v));
        }

        let mut result = query.await?;
        let products: Vec<Product> = result.take(0)?;
        products
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Search with optional name substring and inclusive price bounds.
    /// Sort field is whitelisted; direction is ascending only for the
    /// literal "asc".
    pub async fn search(&self, params: &ProductSearchQuery) -> RepoResult<Vec<Product>> {
        let mut where_parts: Vec<&str> = Vec::new();
        if params.nombre.is_some() {
            where_parts.push("string::lowercase(nombre) CONTAINS string::lowercase($nombre)");
        }
        if params.precio_min.is_some() {
            where_parts.push("precio >= $precio_min");
        }
        if params.precio_max.is_some() {
            where_parts.push("precio <= $precio_max");
        }

        let order_field = params
            .ordenar
            .as_deref()
            .filter(|f| PRODUCT_ORDER_FIELDS.contains(f))
            .unwrap_or("created_at");
        let direction = if params.direccion.as_deref() == Some("asc") {
            "ASC"
        } else {
            "DESC"
        };

        let mut query_str = String::from("SELECT * FROM product");
        if !where_parts.is_empty() {
            query_str.push_str(" WHERE ");
            query_str.push_str(&where_parts.join(" AND "));
        }
        query_str.push_str(&format!(" ORDER BY {} {}", order_field, direction));

        let mut query = self.base.db().query(query_str);
        if let Some(v) = &params.nombre {
            query = query.bind(("nombre", v.clone()));
        }
        if let Some(v) = params.precio_min {
            query = query.bind(("precio_min", v));
        }
        if let Some(v) = params.precio_max {
            query = query.bind(("precio_max", v));
        }

        let products: Vec<Product> = query.await?.take(0)?;
        Ok(products)
    }
}
