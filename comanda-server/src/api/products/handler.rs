//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::{ApiResponse, ProductCreate, ProductSearchQuery, ProductUpdate};

use crate::core::ServerState;
use crate::db::models::Product;
use crate::db::repository::{ProductRepository, RepoError};
use crate::utils::{AppError, AppResult, ok};

/// POST /api/products - create a product
pub async fn create(
    State(state): State<ServerState>,
    Json(req): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    if req.nombre.trim().is_empty() {
        return Err(AppError::validation("nombre es requerido"));
    }
    let precio = match req.precio {
        Some(p) if p > 0.0 => p,
        _ => return Err(AppError::validation("precio debe ser mayor a cero")),
    };

    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .create(Product::new(req.nombre.trim().to_string(), precio))
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        ok(product, "producto creado exitosamente"),
    ))
}

/// GET /api/products - all products, newest first
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(ok(products, "productos obtenidos exitosamente"))
}

/// GET /api/products/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found("producto no encontrado"))?;

    Ok(ok(product, "producto obtenido exitosamente"))
}

/// PUT /api/products/:id - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(req): Json<ProductUpdate>,
) -> AppResult<Json<ApiResponse<Product>>> {
    if let Some(nombre) = &req.nombre
        && nombre.trim().is_empty()
    {
        return Err(AppError::validation("nombre no puede estar vacio"));
    }
    if let Some(precio) = req.precio
        && precio <= 0.0
    {
        return Err(AppError::validation("precio debe ser mayor a cero"));
    }

    let repo = ProductRepository::new(state.db.clone());
    let nombre = req.nombre.map(|n| n.trim().to_string());

    let product = repo
        .update(&id, nombre, req.precio)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::not_found("producto no encontrado"),
            other => AppError::database(other.to_string()),
        })?;

    Ok(ok(product, "producto actualizado exitosamente"))
}

/// GET /api/products/search
pub async fn search(
    State(state): State<ServerState>,
    Query(params): Query<ProductSearchQuery>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo
        .search(&params)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let message = format!("{} producto(s) encontrado(s)", products.len());
    Ok(ok(products, message))
}
