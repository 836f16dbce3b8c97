use rust_decimal::Decimal;
use std::env;

const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";

/// Lowest accepted decimal odds on a posted bet.
pub const MIN_ODDS: Decimal = Decimal::from_parts(101, 0, 0, false, 2);

/// Lowest accepted stake (currency-agnostic units).
pub const MIN_STAKE: Decimal = Decimal::ONE;

/// Fixed cap on repository search results.
pub const SEARCH_RESULT_CAP: u32 = 5;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub github_api_base: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
            github_api_base: env::var("GITHUB_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GITHUB_API_BASE.into()),
        })
    }
}
