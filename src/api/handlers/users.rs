use axum::extract::State;
use axum::Json;

use crate::AppState;

use super::auth::ApiResponse;

/// GET /api/users — all registered usernames (follow-picker source)
pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<Vec<String>>> {
    ApiResponse::ok(state.engine.usernames().await)
}
