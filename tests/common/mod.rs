use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use betbud::api::router::create_router;
use betbud::config::AppConfig;
use betbud::engine::{SessionStore, SharedEngine};
use betbud::github::GithubClient;
use betbud::AppState;

/// Build an app with a fresh in-memory engine. The GitHub client points
/// at a closed local port so search requests fail fast and never leave
/// the machine.
#[allow(dead_code)]
pub fn build_test_app() -> Router {
    let config = AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        github_api_base: "http://127.0.0.1:1".into(),
    };

    let state = AppState {
        engine: SharedEngine::new(),
        sessions: SessionStore::new(),
        github: GithubClient::with_base_url(&config.github_api_base),
        config,
        metrics_handle: betbud::metrics::init_metrics(),
    };

    create_router(state)
}

/// Send a request and decode the JSON body.
#[allow(dead_code)]
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, json)
}

/// Register a user and log them in, returning the session token.
#[allow(dead_code)]
pub async fn register_and_login(app: &Router, username: &str, password: &str) -> String {
    let (status, _) = request(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(serde_json::json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "registration failed for {username}");

    let (status, body) = request(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(serde_json::json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed for {username}");
    body["data"]["token"].as_str().unwrap().to_string()
}
