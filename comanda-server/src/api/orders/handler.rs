//! Order API Handlers
//!
//! Create and update share the same flow: resolve every requested product,
//! snapshot its current name/price into the line items, then write the
//! whole order in a single statement. There is no transaction spanning the
//! product lookups and the write.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::{ApiResponse, OrderItemRequest, OrderPayload, OrderSearchQuery};

use crate::core::ServerState;
use crate::db::models::{Order, OrderLine};
use crate::db::repository::{OrderRepository, ProductRepository, RepoError};
use crate::utils::{AppError, AppResult, ok};

/// Resolve requested items into snapshot lines. Fails with 404 naming the
/// first missing product id; nothing has been written at that point.
async fn build_lines(
    state: &ServerState,
    items: &[OrderItemRequest],
) -> AppResult<Vec<OrderLine>> {
    let repo = ProductRepository::new(state.db.clone());
    let mut lines = Vec::with_capacity(items.len());

    for item in items {
        let product = repo
            .find_by_id(&item.id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| {
                AppError::not_found(format!("producto con id {} no encontrado", item.id))
            })?;

        let cantidad = match item.cantidad {
            Some(c) if c > 0 => c,
            _ => 1,
        };

        lines.push(OrderLine {
            id: product.id.as_ref().map(|i| i.to_string()).unwrap_or_default(),
            nombre: product.nombre,
            precio: product.precio,
            cantidad,
        });
    }

    Ok(lines)
}

/// POST /api/orders - create an order from product references
pub async fn create(
    State(state): State<ServerState>,
    Json(req): Json<OrderPayload>,
) -> AppResult<(StatusCode, Json<ApiResponse<Order>>)> {
    if req.productos.is_empty() {
        return Err(AppError::validation("debe seleccionar al menos un producto"));
    }

    let lines = build_lines(&state, &req.productos).await?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .create(Order::new(lines))
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok((StatusCode::CREATED, ok(order, "orden creada exitosamente")))
}

/// GET /api/orders - all orders, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Order>>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(ok(orders, "ordenes obtenidas exitosamente"))
}

/// GET /api/orders/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found("orden no encontrada"))?;

    Ok(ok(order, "orden obtenida exitosamente"))
}

/// PUT /api/orders/:id - replace the whole line snapshot and total
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(req): Json<OrderPayload>,
) -> AppResult<Json<ApiResponse<Order>>> {
    if req.productos.is_empty() {
        return Err(AppError::validation("debe seleccionar al menos un producto"));
    }

    let lines = build_lines(&state, &req.productos).await?;
    let total = lines.iter().map(OrderLine::subtotal).sum();

    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .replace_items(&id, lines, total)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::not_found("orden no encontrada"),
            other => AppError::database(other.to_string()),
        })?;

    Ok(ok(order, "orden actualizada exitosamente"))
}

/// GET /api/orders/search
///
/// Range and sort filters are pushed into the query; the `productoNombre`
/// substring match runs over the fetched rows because the snapshot lines
/// have no queryable column form.
pub async fn search(
    State(state): State<ServerState>,
    Query(params): Query<OrderSearchQuery>,
) -> AppResult<Json<ApiResponse<Vec<Order>>>> {
    let repo = OrderRepository::new(state.db.clone());
    let mut orders = repo
        .search(&params)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    if let Some(producto_nombre) = &params.producto_nombre {
        let needle = producto_nombre.to_lowercase();
        orders.retain(|order| {
            order
                .productos
                .iter()
                .any(|line| line.nombre.to_lowercase().contains(&needle))
        });
    }

    let message = format!("{} orden(es) encontrada(s)", orders.len());
    Ok(ok(orders, message))
}
