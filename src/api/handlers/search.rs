use axum::extract::{Query, State};
use axum::Json;
use metrics::counter;
use serde::Deserialize;

use crate::config::SEARCH_RESULT_CAP;
use crate::errors::AppError;
use crate::github::RepoResult;
use crate::AppState;

use super::auth::ApiResponse;

const DEFAULT_QUERY: &str = "sports betting";

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// GET /api/search/repos — repository search, most-starred first
///
/// Provider failures surface as a 502 with a user-visible message; they
/// never touch engine state.
pub async fn repos(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<RepoResult>>>, AppError> {
    let query = params
        .q
        .filter(|q| !q.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_QUERY.into());

    counter!("repo_searches_total").increment(1);

    let results = state
        .github
        .search_repositories(&query, SEARCH_RESULT_CAP)
        .await
        .inspect_err(|_| counter!("repo_search_failures_total").increment(1))?;

    Ok(ApiResponse::ok(results))
}
