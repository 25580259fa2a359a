use crate::domain::model::{EbitdaResponse, Query};
use crate::domain::ports::{ConfigProvider, EbitdaSource};
use crate::utils::error::{EbitdaError, Result, UNKNOWN_ERROR_MESSAGE};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

pub const EBITDA_PATH: &str = "/api/v1/ebitda";
pub const HEALTH_PATH: &str = "/api/v1/health";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Deserialize)]
struct HealthBody {
    #[serde(default)]
    status: Option<String>,
}

/// HTTP client for the EBITDA data service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EbitdaError::ConfigError {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.base_url(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn fetch(&self, query: &Query) -> Result<EbitdaResponse> {
        let url = self.url(EBITDA_PATH);
        tracing::debug!(
            "GET {} company={} ({}) year={} report_code={} fs_div={}",
            url,
            query.company,
            if query.is_stock_code() { "stock code" } else { "name" },
            query.year,
            query.report_code,
            query.fs_div
        );

        let response = self
            .client
            .get(&url)
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        tracing::debug!("EBITDA response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(server_error(status, &body));
        }

        let body = response.text().await.map_err(classify_transport_error)?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::debug!("could not decode EBITDA payload: {}", e);
            EbitdaError::Unknown {
                message: format!("invalid response body: {}", e),
            }
        })
    }

    pub async fn health_check(&self) -> bool {
        let url = self.url(HEALTH_PATH);
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("health check failed: {}", e);
                return false;
            }
        };

        if !response.status().is_success() {
            tracing::warn!("health check returned {}", response.status());
            return false;
        }

        match response.json::<HealthBody>().await {
            Ok(body) => body.status.as_deref() == Some("ok"),
            Err(e) => {
                tracing::warn!("health check body was not understood: {}", e);
                false
            }
        }
    }
}

#[async_trait::async_trait]
impl EbitdaSource for ApiClient {
    async fn fetch(&self, query: &Query) -> Result<EbitdaResponse> {
        ApiClient::fetch(self, query).await
    }

    async fn health_check(&self) -> bool {
        ApiClient::health_check(self).await
    }
}

fn classify_transport_error(error: reqwest::Error) -> EbitdaError {
    if error.is_timeout() {
        EbitdaError::Timeout
    } else if error.is_connect() {
        EbitdaError::NetworkUnreachable
    } else {
        EbitdaError::Unknown {
            message: error.to_string(),
        }
    }
}

/// `message`, then `detail`, then the generic text. Blank or non-string
/// fields count as absent (FastAPI sends a list as `detail` on 422).
pub fn error_message_from_body(body: &str) -> String {
    let parsed: serde_json::Value = serde_json::from_str(body).unwrap_or_default();
    let field = |name: &str| {
        parsed
            .get(name)
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    };

    field("message")
        .or_else(|| field("detail"))
        .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string())
}

fn server_error(status: StatusCode, body: &str) -> EbitdaError {
    EbitdaError::Server {
        status: status.as_u16(),
        message: error_message_from_body(body),
    }
}
