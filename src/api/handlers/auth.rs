use axum::extract::State;
use axum::{Extension, Json};
use metrics::{counter, gauge};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::auth::SessionUser;
use crate::errors::AppError;
use crate::AppState;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub username: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: Uuid,
    pub username: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register — create a new user
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<RegisterResponse>>, AppError> {
    if req.username.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest("username and password are required".into()));
    }

    let created = state.engine.register_user(&req.username, &req.password).await?;
    if !created {
        return Err(AppError::Conflict("Username already taken.".into()));
    }

    counter!("users_registered_total").increment(1);
    gauge!("registered_users").set(state.engine.user_count().await as f64);

    Ok(ApiResponse::ok(RegisterResponse {
        username: req.username,
    }))
}

/// POST /api/auth/login — verify credentials and mint a session token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    if !state.engine.login_user(&req.username, &req.password).await {
        return Err(AppError::Unauthorized);
    }

    let token = state.sessions.create(&req.username).await;
    counter!("logins_total").increment(1);

    Ok(ApiResponse::ok(LoginResponse {
        token,
        username: req.username,
    }))
}

/// POST /api/auth/logout — revoke the presented session token
pub async fn logout(
    State(state): State<AppState>,
    Extension(SessionUser(username)): Extension<SessionUser>,
    headers: axum::http::HeaderMap,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .and_then(|t| Uuid::parse_str(t.trim()).ok())
        .ok_or(AppError::Unauthorized)?;

    state.sessions.revoke(&token).await;
    tracing::info!(%username, "User logged out");

    Ok(ApiResponse::ok(serde_json::json!({ "logged_out": true })))
}
