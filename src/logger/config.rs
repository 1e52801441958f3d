/// Logger configuration derived from command-line flags
///
/// Recognized flags:
/// - `--quiet`             minimum level WARNING
/// - `--verbose`           minimum level VERBOSE, every tag
/// - `--debug-<module>`    DEBUG for that tag only
/// - `--verbose-<module>`  VERBOSE for that tag only
/// - `--no-log-file`       console output only
use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub debug_tags: HashSet<String>,
    pub verbose_tags: HashSet<String>,
    /// Set by `--verbose`: every tag gets debug and verbose output
    pub verbose_all: bool,
    pub file_logging: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
            verbose_all: false,
            file_logging: true,
        }
    }
}

impl LoggerConfig {
    pub fn from_args(args: &[String]) -> Self {
        let mut config = LoggerConfig::default();

        for arg in args {
            if arg == "--quiet" {
                config.min_level = LogLevel::Warning;
            } else if arg == "--verbose" {
                config.min_level = LogLevel::Verbose;
                config.verbose_all = true;
            } else if arg == "--no-log-file" {
                config.file_logging = false;
            } else if let Some(key) = arg.strip_prefix("--debug-") {
                if !key.is_empty() {
                    config.debug_tags.insert(key.to_string());
                }
            } else if let Some(key) = arg.strip_prefix("--verbose-") {
                if !key.is_empty() {
                    config.verbose_tags.insert(key.to_string());
                }
            }
        }

        // Per-tag flags lift the threshold unless --quiet asked for less
        let wants_detail = !config.debug_tags.is_empty() || !config.verbose_tags.is_empty();
        if wants_detail && config.min_level == LogLevel::Info {
            config.min_level = if config.verbose_tags.is_empty() {
                LogLevel::Debug
            } else {
                LogLevel::Verbose
            };
        }

        config
    }

    pub fn is_debug_enabled_for(&self, tag: &LogTag) -> bool {
        let key = tag.to_debug_key();
        self.verbose_all || self.debug_tags.contains(&key) || self.verbose_tags.contains(&key)
    }

    pub fn is_verbose_enabled_for(&self, tag: &LogTag) -> bool {
        self.verbose_all || self.verbose_tags.contains(&tag.to_debug_key())
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Snapshot of the active logger configuration
pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG.read().clone()
}

pub fn with_logger_config<F, R>(f: F) -> R
where
    F: FnOnce(&LoggerConfig) -> R,
{
    f(&LOGGER_CONFIG.read())
}

pub fn set_logger_config(config: LoggerConfig) {
    *LOGGER_CONFIG.write() = config;
}

/// Configure the logger from the global command-line arguments
pub fn init_from_args() {
    let args = crate::arguments::get_cmd_args();
    set_logger_config(LoggerConfig::from_args(&args));
}

pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    with_logger_config(|config| config.is_debug_enabled_for(tag))
}
