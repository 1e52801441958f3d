use super::types::{Endpoint, StatusPayload};
use crate::config::DashboardConfig;
use crate::errors::{FetchError, FleetError};
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use std::time::Duration;

/// Fetches one endpoint's status payload
///
/// One attempt per call, no retries: the next refresh cycle is the retry.
#[async_trait]
pub trait StatusFetcher: Send + Sync {
    async fn fetch_status(&self, endpoint: &Endpoint) -> Result<StatusPayload, FetchError>;
}

/// `{base_url}/api/status` with trailing slashes on the base collapsed
pub fn status_url(base_url: &str, status_path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        status_path.trim_start_matches('/')
    )
}

/// reqwest-backed fetcher
pub struct HttpStatusFetcher {
    client: Client,
    status_path: String,
    timeout_ms: u64,
}

impl HttpStatusFetcher {
    pub fn new(config: &DashboardConfig) -> Result<Self, FleetError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FleetError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config))
    }

    /// Use a preconfigured client; `config` still supplies the status path
    pub fn with_client(client: Client, config: &DashboardConfig) -> Self {
        Self {
            client,
            status_path: config.status_path.clone(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    pub fn status_url(&self, endpoint: &Endpoint) -> String {
        status_url(&endpoint.base_url, &self.status_path)
    }

    fn request_error(&self, endpoint: &Endpoint, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                endpoint: endpoint.name.clone(),
                timeout_ms: self.timeout_ms,
            }
        } else {
            FetchError::Network {
                endpoint: endpoint.name.clone(),
                message: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl StatusFetcher for HttpStatusFetcher {
    async fn fetch_status(&self, endpoint: &Endpoint) -> Result<StatusPayload, FetchError> {
        let url = self.status_url(endpoint);
        logger::verbose(LogTag::Poller, &format!("GET {} ({})", url, endpoint.name));

        // Never serve this from a cache anywhere along the path
        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| self.request_error(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                endpoint: endpoint.name.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.request_error(endpoint, e))?;

        StatusPayload::from_json(&body).map_err(|e| FetchError::Parse {
            endpoint: endpoint.name.clone(),
            message: e.to_string(),
        })
    }
}
