use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;
use super::auth::require_session;
use super::handlers;

pub fn create_router(state: AppState) -> Router {
    // Public routes — no session required
    let public = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render))
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login));

    // Protected routes — require a live session token
    let protected = Router::new()
        .route("/api/auth/logout", post(handlers::auth::logout))
        // Users & friends
        .route("/api/users", get(handlers::users::list))
        .route("/api/friends", get(handlers::friends::list).post(handlers::friends::add))
        // Bets & feed
        .route("/api/bets", get(handlers::bets::list).post(handlers::bets::create))
        .route("/api/feed", get(handlers::feed::feed))
        // Repository search
        .route("/api/search/repos", get(handlers::search::repos))
        .layer(middleware::from_fn_with_state(state.clone(), require_session));

    // CORS: the prototype front end may be served from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    public
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
