//! Severity classification and display formatting
//!
//! These functions are the contract between the view model and whatever
//! renders it: the same inputs must always produce the same tokens.

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt::Display;

/// Latencies up to and including this value are "good"
pub const GOOD_LATENCY_MAX_MS: f64 = 10.0;
/// Latencies above good and up to and including this value are "warn"
pub const WARN_LATENCY_MAX_MS: f64 = 25.0;

/// Placeholder for any value that has no defined sample
pub const UNKNOWN_VALUE: &str = "--";

/// Display severity token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Good,
    Warn,
    Bad,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Good => "good",
            Severity::Warn => "warn",
            Severity::Bad => "bad",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `None` (unknown/unreachable) and negative values are bad;
/// `0..=10` good, `(10, 25]` warn, above 25 bad.
pub fn latency_severity(ms: Option<f64>) -> Severity {
    match ms {
        Some(x) if (0.0..=GOOD_LATENCY_MAX_MS).contains(&x) => Severity::Good,
        Some(x) if x > GOOD_LATENCY_MAX_MS && x <= WARN_LATENCY_MAX_MS => Severity::Warn,
        _ => Severity::Bad,
    }
}

pub fn health_severity(healthy: bool) -> Severity {
    if healthy {
        Severity::Ok
    } else {
        Severity::Bad
    }
}

/// Badge text on a fleet tile
pub fn health_label(healthy: bool) -> &'static str {
    if healthy {
        "OK"
    } else {
        "DOWN"
    }
}

/// Fleet-wide connectivity indicator text
pub fn connectivity_label(connected: bool) -> &'static str {
    if connected {
        "CONNECTED"
    } else {
        "DISCONNECTED"
    }
}

pub fn connectivity_severity(connected: bool) -> Severity {
    health_severity(connected)
}

/// `12.3` -> `"12.30ms"`; unknown or negative -> `"--"`
pub fn format_latency(ms: Option<f64>) -> String {
    match ms {
        Some(x) if x.is_finite() && x >= 0.0 => format!("{:.2}ms", x),
        _ => UNKNOWN_VALUE.to_string(),
    }
}

pub fn format_uptime(uptime_seconds: Option<u64>) -> String {
    match uptime_seconds {
        Some(secs) => format!("{}s", secs),
        None => UNKNOWN_VALUE.to_string(),
    }
}

/// Port or any other optional integer metadata
pub fn format_optional<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => UNKNOWN_VALUE.to_string(),
    }
}

pub fn format_samples(samples: u64) -> String {
    format!("n {}", samples)
}

/// Zero-padded `HH:MM:SS`
pub fn format_clock<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format("%H:%M:%S").to_string()
}
