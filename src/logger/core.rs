/// Core logging implementation with automatic filtering
///
/// Checks whether a message should be displayed based on level and tag, then
/// hands it to the format module for console and file output.
use super::config::{with_logger_config, LoggerConfig};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Filtering rules:
/// 1. Errors are always shown
/// 2. Anything above the minimum level threshold is dropped
/// 3. Debug level requires --debug-<module> for that tag (or --verbose)
/// 4. Verbose level requires --verbose or --verbose-<module> for that tag
pub fn should_log_with(config: &LoggerConfig, tag: &LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    if level > config.min_level {
        return false;
    }

    if level == LogLevel::Debug && !config.is_debug_enabled_for(tag) {
        return false;
    }

    level != LogLevel::Verbose || config.is_verbose_enabled_for(tag)
}

pub fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    with_logger_config(|config| should_log_with(config, tag, level))
}

/// Internal logging function with automatic filtering
pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&tag, level) {
        return;
    }

    super::format::format_and_log(tag, level, message);
}
