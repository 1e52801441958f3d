/// Configuration utilities - loading and access helpers
///
/// This module provides:
/// - Loading configuration from disk (TOML)
/// - Thread-safe access helpers over the global CONFIG
use super::schemas::Config;
use crate::logger::{self, LogTag};
use once_cell::sync::OnceCell;
use std::sync::RwLock;

/// Global configuration instance
///
/// This is the single source of truth for all configuration values.
/// Access it using the helper functions below.
pub static CONFIG: OnceCell<RwLock<Config>> = OnceCell::new();

/// Default configuration file path
pub const CONFIG_FILE_PATH: &str = "data/config.toml";

/// Load configuration from a specific file path
///
/// A missing file is not an error: defaults from the schema definitions are
/// used instead. A file that exists but does not parse is an error.
pub fn load_config_from_path(path: &str) -> Result<(), String> {
    let config = read_config_file(path)?;

    CONFIG
        .set(RwLock::new(config))
        .map_err(|_| "Config already initialized".to_string())?;

    Ok(())
}

/// Read and parse a config file without touching the global instance
pub fn read_config_file(path: &str) -> Result<Config, String> {
    if !std::path::Path::new(path).exists() {
        logger::warning(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path),
        );
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path, e))?;

    parse_config(&contents).map_err(|e| format!("Failed to parse config file '{}': {}", path, e))
}

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(contents)
}

/// Execute a function with read access to the configuration
///
/// Falls back to default values when load_config_from_path() has not been called,
/// so library consumers and tests never panic on access.
///
/// # Example
/// ```
/// use fleetboard::config::with_config;
///
/// let interval = with_config(|cfg| cfg.dashboard.refresh_interval_ms);
/// assert!(interval > 0);
/// ```
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&Config) -> R,
{
    match CONFIG.get() {
        Some(lock) => match lock.read() {
            Ok(config) => f(&config),
            Err(poisoned) => f(&poisoned.into_inner()),
        },
        None => f(&Config::default()),
    }
}

/// Get a clone of the entire configuration
///
/// Useful when config values must be held across await points.
pub fn get_config_clone() -> Config {
    with_config(|cfg| cfg.clone())
}
