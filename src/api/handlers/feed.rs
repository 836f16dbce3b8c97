use axum::extract::State;
use axum::{Extension, Json};
use metrics::counter;

use crate::api::auth::SessionUser;
use crate::models::Bet;
use crate::AppState;

use super::auth::ApiResponse;

/// GET /api/feed — friends' bets, most recent first
///
/// Recomputed from the registry on every call; a friend username with
/// no registry entry is skipped rather than reported.
pub async fn feed(
    State(state): State<AppState>,
    Extension(SessionUser(username)): Extension<SessionUser>,
) -> Json<ApiResponse<Vec<Bet>>> {
    counter!("feed_requests_total").increment(1);
    ApiResponse::ok(state.engine.get_feed(&username).await)
}
