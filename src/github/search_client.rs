use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const GITHUB_API_BASE: &str = "https://api.github.com";

// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("betbud/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum GithubClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Unexpected(String),
}

/// One repository search hit.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RepoResult {
    pub full_name: String,
    pub html_url: String,
    pub stargazers_count: u64,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<RepoResult>,
}

/// Read-only client for the GitHub repository search API. Entirely
/// independent of the social engine; shares no state with it.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    base_url: String,
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GithubClient {
    pub fn new() -> Self {
        Self::with_base_url(GITHUB_API_BASE)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Search repositories matching `query`, most-starred first,
    /// returning at most `limit` results.
    pub async fn search_repositories(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<RepoResult>, GithubClientError> {
        let url = format!("{}/search/repositories", self.base_url);
        let per_page = limit.to_string();
        let resp = self
            .http
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .query(&[
                ("q", query),
                ("sort", "stars"),
                ("order", "desc"),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let mut results: SearchResponse = resp.json().await?;
        // The per_page param should already cap the page; truncate in
        // case the endpoint ignores it.
        results.items.truncate(limit as usize);
        Ok(results.items)
    }
}
