//! Shared fixture: full application over a throwaway embedded database

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use comanda_server::api;
use comanda_server::core::{Config, ServerState};
use comanda_server::db::models::{Rol, User, UserCreate};
use comanda_server::db::repository::UserRepository;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
    pub state: ServerState,
    // Dropping the TempDir deletes the database files
    _work_dir: TempDir,
}

impl TestApp {
    /// Full initialization against a fresh RocksDB under a temp dir
    pub async fn spawn() -> Self {
        let work_dir = tempfile::tempdir().unwrap();
        let config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);
        let state = ServerState::initialize(&config).await.unwrap();
        let app = api::build_app(state.clone());
        Self {
            app,
            state,
            _work_dir: work_dir,
        }
    }

    pub async fn seed_user(&self, email: &str, password: &str, nombre: &str, rol: Rol) -> User {
        UserRepository::new(self.state.db.clone())
            .create(UserCreate {
                email: email.to_string(),
                password: password.to_string(),
                nombre: nombre.to_string(),
                rol,
            })
            .await
            .unwrap()
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .post(
                "/api/auth/login",
                None,
                json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["data"]["token"].as_str().unwrap().to_string()
    }

    pub async fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request("GET", path, token, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        token: Option<&str>,
        body: Value,
    ) -> (StatusCode, Value) {
        self.request("POST", path, token, Some(body)).await
    }

    pub async fn put(&self, path: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request("PUT", path, token, Some(body)).await
    }

    /// Create a product through the API, returning its id
    pub async fn create_product(&self, nombre: &str, precio: f64) -> String {
        let (status, body) = self
            .post(
                "/api/products",
                None,
                json!({ "nombre": nombre, "precio": precio }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "product create failed: {body}");
        body["data"]["id"].as_str().unwrap().to_string()
    }
}
