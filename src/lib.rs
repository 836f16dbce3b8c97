pub mod api;
pub mod config;
pub mod engine;
pub mod errors;
pub mod github;
pub mod metrics;
pub mod models;

use crate::config::AppConfig;
use crate::engine::{SessionStore, SharedEngine};
use crate::github::GithubClient;

#[derive(Clone)]
pub struct AppState {
    pub engine: SharedEngine,
    pub sessions: SessionStore,
    pub github: GithubClient,
    pub config: AppConfig,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
