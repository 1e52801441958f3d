//! Shared helpers for fleet tests: local axum status servers and a stub fetcher

use super::fetcher::{HttpStatusFetcher, StatusFetcher};
use super::types::{Endpoint, StatusPayload};
use crate::config::DashboardConfig;
use crate::errors::FetchError;
use async_trait::async_trait;
use axum::routing::get;
use axum::Router;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;
use tokio::net::TcpListener;

/// Route that never answers within any test timeout
pub const HANGING_PATH: &str = "/api/hang";

/// `/api/status` answering `body`, plus the hanging route
pub fn status_route(body: &'static str) -> Router {
    Router::new()
        .route("/api/status", get(move || async move { body }))
        .route(
            HANGING_PATH,
            get(|| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                "{}"
            }),
        )
}

/// Serve `router` on an ephemeral localhost port, return its base URL
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn test_client(timeout_ms: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .no_proxy()
        .build()
        .unwrap()
}

pub fn test_fetcher(timeout_ms: u64) -> HttpStatusFetcher {
    let config = DashboardConfig {
        request_timeout_ms: timeout_ms,
        ..DashboardConfig::default()
    };
    HttpStatusFetcher::with_client(test_client(timeout_ms), &config)
}

/// Scripted fetcher keyed by endpoint name
///
/// Unknown names fail with a network error. `delays` holds a response delay
/// per name so tests can control completion order.
#[derive(Default)]
pub struct StubFetcher {
    pub responses: HashMap<String, Result<StatusPayload, FetchError>>,
    pub delays: HashMap<String, Duration>,
    pub calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn up(mut self, name: &str, payload: StatusPayload) -> Self {
        self.responses.insert(name.to_string(), Ok(payload));
        self
    }

    pub fn down(mut self, name: &str) -> Self {
        self.responses.insert(
            name.to_string(),
            Err(FetchError::Network {
                endpoint: name.to_string(),
                message: "connection refused".to_string(),
            }),
        );
        self
    }

    pub fn delayed(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl StatusFetcher for StubFetcher {
    async fn fetch_status(&self, endpoint: &Endpoint) -> Result<StatusPayload, FetchError> {
        self.calls.lock().push(endpoint.name.clone());

        if let Some(delay) = self.delays.get(&endpoint.name) {
            tokio::time::sleep(*delay).await;
        }

        self.responses
            .get(&endpoint.name)
            .cloned()
            .unwrap_or_else(|| {
                Err(FetchError::Network {
                    endpoint: endpoint.name.clone(),
                    message: "no scripted response".to_string(),
                })
            })
    }
}
