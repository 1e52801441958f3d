/// Configuration schemas - all config structures defined once with defaults
///
/// Each struct is defined using the config_struct! macro which provides:
/// - Single-source definition (no repetition)
/// - Embedded defaults
/// - Serde support
use crate::config_struct;

// ============================================================================
// DASHBOARD CONFIGURATION
// ============================================================================

config_struct! {
    /// Refresh loop and status fetcher configuration
    pub struct DashboardConfig {
        /// Interval between refresh cycles (milliseconds)
        refresh_interval_ms: u64 = 1000,

        /// Transport timeout for a single status request (milliseconds)
        request_timeout_ms: u64 = 5000,

        /// Path appended to every endpoint base URL
        status_path: String = "/api/status".to_string(),

        /// User-Agent header sent with status requests
        user_agent: String = "FleetBoard/1.0".to_string(),
    }
}

// ============================================================================
// WEBSERVER CONFIGURATION
// ============================================================================

config_struct! {
    /// View model publishing server
    pub struct WebserverConfig {
        enabled: bool = true,
        host: String = "127.0.0.1".to_string(),
        port: u16 = 8090,
    }
}

// ============================================================================
// FLEET ENDPOINTS
// ============================================================================

config_struct! {
    /// One fleet member
    pub struct EndpointConfig {
        /// Display label shown on the fleet tile
        name: String = String::new(),

        /// Absolute base URL, e.g. http://10.0.0.5:7777
        base_url: String = String::new(),
    }
}

// ============================================================================
// ROOT CONFIGURATION
// ============================================================================

config_struct! {
    /// Root configuration loaded from data/config.toml
    pub struct Config {
        dashboard: DashboardConfig = DashboardConfig::default(),

        webserver: WebserverConfig = WebserverConfig::default(),

        /// Ordered fleet registry
        endpoints: Vec<EndpointConfig> = vec![EndpointConfig {
            name: "VPS-01".to_string(),
            base_url: "http://127.0.0.1:7777".to_string(),
        }],
    }
}
