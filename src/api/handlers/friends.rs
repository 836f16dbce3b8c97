use axum::extract::State;
use axum::{Extension, Json};
use metrics::counter;
use serde::Deserialize;

use crate::api::auth::SessionUser;
use crate::errors::AppError;
use crate::AppState;

use super::auth::ApiResponse;

#[derive(Deserialize)]
pub struct AddFriendRequest {
    pub username: String,
}

/// GET /api/friends — who the caller follows, in follow order
pub async fn list(
    State(state): State<AppState>,
    Extension(SessionUser(username)): Extension<SessionUser>,
) -> Result<Json<ApiResponse<Vec<String>>>, AppError> {
    let friends = state
        .engine
        .friends_of(&username)
        .await
        .ok_or_else(|| AppError::NotFound("user not found".into()))?;

    Ok(ApiResponse::ok(friends))
}

/// POST /api/friends — follow another user
///
/// 404 when the target is unregistered. Following yourself or someone
/// already followed succeeds without changing the friend list.
pub async fn add(
    State(state): State<AppState>,
    Extension(SessionUser(username)): Extension<SessionUser>,
    Json(req): Json<AddFriendRequest>,
) -> Result<Json<ApiResponse<Vec<String>>>, AppError> {
    if !state.engine.add_friend(&username, &req.username).await {
        return Err(AppError::NotFound(format!(
            "user '{}' is not registered",
            req.username
        )));
    }

    counter!("friend_edges_total").increment(1);

    let friends = state.engine.friends_of(&username).await.unwrap_or_default();
    Ok(ApiResponse::ok(friends))
}
