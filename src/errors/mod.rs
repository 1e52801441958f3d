/// Error types for FleetBoard
///
/// `FetchError` describes why a single status fetch failed. It never leaves the
/// fleet poller: the poller logs it and collapses it into `FleetOutcome::Failure`.
/// `FleetError` covers startup failures: bad endpoint configuration and HTTP
/// client construction.
use thiserror::Error;

// =============================================================================
// MAIN ERROR TYPE
// =============================================================================

#[derive(Debug, Clone, Error)]
pub enum FleetError {
    #[error("Configuration Error: {0}")]
    Configuration(String),

    #[error("Network Error: {0}")]
    Network(String),
}

impl FleetError {
    pub fn configuration(message: impl Into<String>) -> Self {
        FleetError::Configuration(message.into())
    }
}

// =============================================================================
// PER-ENDPOINT FETCH ERRORS
// =============================================================================

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Connection refused, DNS failure, reset mid-body, ...
    #[error("request to {endpoint} failed: {message}")]
    Network { endpoint: String, message: String },

    /// Transport-level timeout from the HTTP client
    #[error("request to {endpoint} timed out after {timeout_ms}ms")]
    Timeout { endpoint: String, timeout_ms: u64 },

    #[error("HTTP {status} from {endpoint}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("invalid JSON from {endpoint}: {message}")]
    Parse { endpoint: String, message: String },
}

impl FetchError {
    /// Short category name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "network",
            FetchError::Timeout { .. } => "timeout",
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::Parse { .. } => "parse",
        }
    }
}
