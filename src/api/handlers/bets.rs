use axum::extract::State;
use axum::{Extension, Json};
use metrics::counter;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::api::auth::SessionUser;
use crate::config::{MIN_ODDS, MIN_STAKE};
use crate::errors::AppError;
use crate::models::Bet;
use crate::AppState;

use super::auth::ApiResponse;

#[derive(Deserialize)]
pub struct PostBetRequest {
    pub description: String,
    pub event: String,
    pub odds: Decimal,
    pub stake: Decimal,
}

/// GET /api/bets — the caller's own authored bets, oldest first
pub async fn list(
    State(state): State<AppState>,
    Extension(SessionUser(username)): Extension<SessionUser>,
) -> Result<Json<ApiResponse<Vec<Bet>>>, AppError> {
    let bets = state
        .engine
        .bets_of(&username)
        .await
        .ok_or_else(|| AppError::NotFound("user not found".into()))?;

    Ok(ApiResponse::ok(bets))
}

/// POST /api/bets — post a new bet
///
/// Input bounds live here, outside the engine: description and event
/// must be non-empty, odds ≥ 1.01, stake ≥ 1.0.
pub async fn create(
    State(state): State<AppState>,
    Extension(SessionUser(username)): Extension<SessionUser>,
    Json(req): Json<PostBetRequest>,
) -> Result<Json<ApiResponse<Bet>>, AppError> {
    if req.description.trim().is_empty() || req.event.trim().is_empty() {
        return Err(AppError::BadRequest("Please fill in all fields.".into()));
    }
    if req.odds < MIN_ODDS {
        return Err(AppError::BadRequest(format!("odds must be at least {MIN_ODDS}")));
    }
    if req.stake < MIN_STAKE {
        return Err(AppError::BadRequest(format!("stake must be at least {MIN_STAKE}")));
    }

    let bet = state
        .engine
        .post_bet(&username, &req.description, &req.event, req.odds, req.stake)
        .await
        .ok_or_else(|| AppError::NotFound("user not found".into()))?;

    counter!("bets_posted_total").increment(1);
    tracing::info!(author = %username, event = %req.event, "Bet posted: {bet}");

    Ok(ApiResponse::ok(bet))
}
