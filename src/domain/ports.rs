use crate::domain::model::{EbitdaResponse, Query};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that can answer EBITDA lookups: the HTTP client in production,
/// in-memory fakes in tests.
#[async_trait]
pub trait EbitdaSource: Send + Sync {
    async fn fetch(&self, query: &Query) -> Result<EbitdaResponse>;

    /// Never fails; an unhealthy or unreachable service is just `false`.
    async fn health_check(&self) -> bool;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn series_years(&self) -> usize;
}
