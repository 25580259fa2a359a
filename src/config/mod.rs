#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::client::DEFAULT_TIMEOUT_SECONDS;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};

/// Local development backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const API_URL_ENV: &str = "EBITDA_API_URL";
pub const DEFAULT_SERIES_YEARS: usize = 5;
/// Upper bound on the per-year fan-out, the same span the search form offers.
pub const MAX_SERIES_YEARS: usize = 10;

/// Effective settings for talking to the EBITDA service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub series_years: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            series_years: DEFAULT_SERIES_YEARS,
        }
    }
}

impl ClientConfig {
    /// Defaults, with the base URL taken from `EBITDA_API_URL` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = env_base_url() {
            config.base_url = url;
        }
        config
    }
}

pub fn env_base_url() -> Option<String> {
    std::env::var(API_URL_ENV)
        .ok()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}

impl ConfigProvider for ClientConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn series_years(&self) -> usize {
        self.series_years
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)?;
        validate_positive_number("api.timeout_seconds", self.timeout_seconds, 1)?;
        validate_range("series.years", self.series_years, 1, MAX_SERIES_YEARS)
    }
}
