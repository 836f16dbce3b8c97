use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::AppState;

/// Username resolved from the session token, injected into request
/// extensions for handlers behind [`require_session`].
#[derive(Debug, Clone)]
pub struct SessionUser(pub String);

/// Session-token authentication middleware.
///
/// Every protected request must carry `Authorization: Bearer <token>`
/// where `<token>` is a UUID minted by the login handler and still live
/// in the session store.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .and_then(|t| Uuid::parse_str(t.trim()).ok());

    let Some(token) = token else {
        return (
            StatusCode::UNAUTHORIZED,
            "Missing or invalid Authorization header",
        )
            .into_response();
    };

    match state.sessions.resolve(&token).await {
        Some(username) => {
            req.extensions_mut().insert(SessionUser(username));
            next.run(req).await
        }
        None => (StatusCode::UNAUTHORIZED, "Invalid session token").into_response(),
    }
}
