//! Authentication Handlers

use axum::{Json, extract::State};
use shared::{ApiResponse, LoginRequest, LoginResponse, UserInfo};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::User;
use crate::db::repository::UserRepository;
use crate::utils::{AppError, AppResult, ok};

/// POST /api/auth/login
///
/// Validates credentials and issues the signed bearer token.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    if req.email.trim().is_empty() {
        return Err(AppError::validation("el email es requerido"));
    }
    if req.password.trim().is_empty() {
        return Err(AppError::validation("la contrasena es requerida"));
    }

    let repo = UserRepository::new(state.db.clone());
    let email = req.email.trim().to_lowercase();

    let user = repo
        .find_by_email(&email)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let user = match user {
        Some(u) => u,
        None => {
            tracing::warn!(email = %email, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    if !user.activo {
        tracing::warn!(email = %email, "Login rejected - inactive user");
        return Err(AppError::forbidden("usuario inactivo"));
    }

    let password_valid = user
        .verify_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

    if !password_valid {
        tracing::warn!(email = %email, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(
            user.id_string(),
            user.email.clone(),
            user.nombre.clone(),
            user.rol.to_string(),
        )
        .map_err(|e| AppError::internal(format!("Token generation failed: {}", e)))?;

    tracing::info!(email = %email, rol = %user.rol, "Login successful");

    Ok(ok(
        LoginResponse {
            id: user.id_string(),
            email: user.email,
            nombre: user.nombre,
            rol: user.rol.to_string(),
            token,
        },
        "login exitoso",
    ))
}

/// GET /api/auth/verify - echo the validated token claims
pub async fn verify(user: CurrentUser) -> AppResult<Json<ApiResponse<UserInfo>>> {
    Ok(ok(
        UserInfo {
            id: user.id,
            email: user.email,
            nombre: user.nombre,
            rol: user.rol,
        },
        "token valido",
    ))
}

/// GET /api/auth/profile - re-read the authenticated user's row
pub async fn profile(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<User>>> {
    let repo = UserRepository::new(state.db.clone());
    let row = repo
        .find_by_id(&user.id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found("usuario no encontrado"))?;

    Ok(ok(row, "perfil obtenido exitosamente"))
}

/// GET /api/auth/users - admin-only listing, newest first
pub async fn list_users(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<User>>>> {
    let repo = UserRepository::new(state.db.clone());
    let users = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(ok(users, "usuarios obtenidos exitosamente"))
}
