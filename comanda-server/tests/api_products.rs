//! Product endpoint tests: CRUD, validation, search

mod common;

use common::TestApp;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_product_returns_201_with_envelope() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post(
            "/api/products",
            None,
            json!({ "nombre": "Tacos al pastor", "precio": 8.5 }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ok"], true);
    assert_eq!(body["message"], "producto creado exitosamente");
    assert_eq!(body["data"]["nombre"], "Tacos al pastor");
    assert_eq!(body["data"]["precio"], 8.5);
    let id = body["data"]["id"].as_str().unwrap();
    assert!(id.starts_with("product:"), "id was {id}");
    assert!(body["data"]["created_at"].as_str().is_some());
}

#[tokio::test]
async fn create_product_trims_the_name() {
    let app = TestApp::spawn().await;

    let (_, body) = app
        .post(
            "/api/products",
            None,
            json!({ "nombre": "  Horchata  ", "precio": 2.0 }),
        )
        .await;

    assert_eq!(body["data"]["nombre"], "Horchata");
}

#[tokio::test]
async fn create_product_validation() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post("/api/products", None, json!({ "nombre": "   ", "precio": 5.0 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);
    assert_eq!(body["message"], "nombre es requerido");
    assert_eq!(body["data"], "");

    let (status, body) = app
        .post("/api/products", None, json!({ "nombre": "Cafe" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "precio debe ser mayor a cero");

    let (status, _) = app
        .post("/api/products", None, json!({ "nombre": "Cafe", "precio": 0 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post("/api/products", None, json!({ "nombre": "Cafe", "precio": -1.5 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_returns_newest_first() {
    let app = TestApp::spawn().await;
    app.create_product("Primero", 1.0).await;
    app.create_product("Segundo", 2.0).await;
    app.create_product("Tercero", 3.0).await;

    let (status, body) = app.get("/api/products", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "productos obtenidos exitosamente");
    let products = body["data"].as_array().unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(products[0]["nombre"], "Tercero");
    assert_eq!(products[2]["nombre"], "Primero");
}

#[tokio::test]
async fn get_by_id_accepts_bare_and_full_ids() {
    let app = TestApp::spawn().await;
    let id = app.create_product("Quesadilla", 6.0).await;

    let (status, body) = app.get(&format!("/api/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["nombre"], "Quesadilla");

    // Bare key without the table prefix resolves to the same row
    let bare = id.strip_prefix("product:").unwrap();
    let (status, body) = app.get(&format!("/api/products/{bare}"), None).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["nombre"], "Quesadilla");
}

#[tokio::test]
async fn get_by_id_is_idempotent() {
    let app = TestApp::spawn().await;
    let id = app.create_product("Tamales", 4.5).await;

    let (_, first) = app.get(&format!("/api/products/{id}"), None).await;
    let (_, second) = app.get(&format!("/api/products/{id}"), None).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn get_missing_product_is_404() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/api/products/noexiste", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["ok"], false);
    assert_eq!(body["message"], "producto no encontrado");
}

#[tokio::test]
async fn update_is_partial() {
    let app = TestApp::spawn().await;
    let id = app.create_product("Torta", 5.0).await;

    // Only the price
    let (status, body) = app
        .put(&format!("/api/products/{id}"), None, json!({ "precio": 6.5 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "producto actualizado exitosamente");
    assert_eq!(body["data"]["nombre"], "Torta");
    assert_eq!(body["data"]["precio"], 6.5);

    // Only the name
    let (status, body) = app
        .put(
            &format!("/api/products/{id}"),
            None,
            json!({ "nombre": "Torta cubana" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["nombre"], "Torta cubana");
    assert_eq!(body["data"]["precio"], 6.5);
}

#[tokio::test]
async fn update_validation_and_missing_target() {
    let app = TestApp::spawn().await;
    let id = app.create_product("Agua", 1.0).await;

    let (status, body) = app
        .put(&format!("/api/products/{id}"), None, json!({ "nombre": "  " }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "nombre no puede estar vacio");

    let (status, body) = app
        .put(&format!("/api/products/{id}"), None, json!({ "precio": 0 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "precio debe ser mayor a cero");

    let (status, body) = app
        .put("/api/products/noexiste", None, json!({ "precio": 9.0 }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "producto no encontrado");
}

#[tokio::test]
async fn search_by_name_is_case_insensitive_substring() {
    let app = TestApp::spawn().await;
    app.create_product("Tacos al pastor", 8.5).await;
    app.create_product("Tacos de asada", 9.0).await;
    app.create_product("Pozole", 7.0).await;

    let (status, body) = app.get("/api/products/search?nombre=TACOS", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "2 producto(s) encontrado(s)");
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn search_price_bounds_are_inclusive() {
    let app = TestApp::spawn().await;
    app.create_product("Barato", 2.0).await;
    app.create_product("Medio", 5.0).await;
    app.create_product("Caro", 10.0).await;

    let (_, body) = app
        .get("/api/products/search?precioMin=2&precioMax=5", None)
        .await;
    let products = body["data"].as_array().unwrap();
    assert_eq!(products.len(), 2);

    let (_, body) = app.get("/api/products/search?precioMin=5.01", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn search_sorting_and_direction() {
    let app = TestApp::spawn().await;
    app.create_product("Bravas", 4.0).await;
    app.create_product("Aceitunas", 2.0).await;
    app.create_product("Croquetas", 6.0).await;

    let (_, body) = app
        .get("/api/products/search?ordenar=precio&direccion=asc", None)
        .await;
    let products = body["data"].as_array().unwrap();
    assert_eq!(products[0]["nombre"], "Aceitunas");
    assert_eq!(products[2]["nombre"], "Croquetas");

    let (_, body) = app
        .get("/api/products/search?ordenar=nombre&direccion=desc", None)
        .await;
    let products = body["data"].as_array().unwrap();
    assert_eq!(products[0]["nombre"], "Croquetas");

    // Unknown sort field falls back to created_at
    let (status, body) = app
        .get("/api/products/search?ordenar=precio;DROP", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let products = body["data"].as_array().unwrap();
    assert_eq!(products[0]["nombre"], "Croquetas");
}

#[tokio::test]
async fn search_without_filters_returns_everything() {
    let app = TestApp::spawn().await;
    app.create_product("Uno", 1.0).await;
    app.create_product("Dos", 2.0).await;

    let (status, body) = app.get("/api/products/search", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "2 producto(s) encontrado(s)");
}
