//! Structured logging system for FleetBoard
//!
//! This module provides a small, ergonomic logging API with:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-module debug control via --debug-<module> flags
//! - Dual output: colored console + file persistence
//! - A `log` facade bridge so third-party crates land in the same stream
//!
//! ## Usage
//!
//! ```rust
//! use fleetboard::logger::{self, LogTag};
//!
//! logger::warning(LogTag::Poller, "VPS-02 unreachable");
//! logger::info(LogTag::Fleet, "Refresh loop started");
//! logger::debug(LogTag::Poller, "GET http://10.0.0.2:7777/api/status"); // Only with --debug-poller
//! ```
//!
//! ## Initialization
//!
//! Call once at startup, before any logging occurs:
//! ```no_run
//! fleetboard::logger::init();
//! ```

mod bridge;
mod config;
mod core;
mod file;
mod format;
mod levels;
mod special;
mod tags;

pub use config::{
    get_logger_config, init_from_args, set_logger_config, LoggerConfig,
};
pub use levels::LogLevel;
pub use special::{log_cycle_summary, log_endpoint_transition};
pub use tags::LogTag;

/// Initialize the logger system
///
/// 1. Parse command-line arguments for debug flags
/// 2. Initialize file logging (unless --no-log-file)
/// 3. Route the `log` facade into this logger
pub fn init() {
    config::init_from_args();

    if get_logger_config().file_logging {
        file::init_file_logging();
    }

    bridge::install();
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (shown even with --quiet)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level
///
/// Only shown when the --debug-<module> flag matching the tag is provided.
///
/// # Example
/// ```rust
/// use fleetboard::logger::{self, LogTag};
///
/// // Only shown with --debug-webserver
/// logger::debug(LogTag::Webserver, "GET /api/fleet");
/// ```
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (only with --verbose or --verbose-<module>)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}

/// Whether a DEBUG line for `tag` would be emitted
///
/// Lets callers skip building expensive messages.
pub fn is_debug_enabled(tag: LogTag) -> bool {
    core::should_log(&tag, LogLevel::Debug)
}

/// Force flush all pending log writes
///
/// Call this during shutdown to ensure all logs are written to disk.
pub fn flush() {
    file::flush_file_logging();
}
