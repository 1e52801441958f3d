use super::classify::{format_optional, health_severity, latency_severity, Severity};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

/// One tile per endpoint per cycle
///
/// `healthy == false` always comes with `uptime_seconds` and `listen_port`
/// set to `None`; build cards through `FleetCard::up` / `FleetCard::down`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetCard {
    pub name: String,
    pub base_url: String,
    pub healthy: bool,
    pub uptime_seconds: Option<u64>,
    pub listen_port: Option<u16>,
}

impl FleetCard {
    pub fn up(
        name: &str,
        base_url: &str,
        uptime_seconds: Option<u64>,
        listen_port: Option<u16>,
    ) -> Self {
        Self {
            name: name.to_string(),
            base_url: base_url.to_string(),
            healthy: true,
            uptime_seconds,
            listen_port,
        }
    }

    pub fn down(name: &str, base_url: &str) -> Self {
        Self {
            name: name.to_string(),
            base_url: base_url.to_string(),
            healthy: false,
            uptime_seconds: None,
            listen_port: None,
        }
    }

    pub fn severity(&self) -> Severity {
        health_severity(self.healthy)
    }
}

/// One row per reported probe, tagged with the owning endpoint's name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyRow {
    pub endpoint_name: String,
    pub label: String,
    pub host: String,
    pub port: Option<u16>,
    pub last_ms: Option<f64>,
    pub p50_ms: Option<f64>,
    pub p95_ms: Option<f64>,
    pub samples: u64,
}

/// Pill classes for last / p50 / p95
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencySeverities {
    pub last: Severity,
    pub p50: Severity,
    pub p95: Severity,
}

impl LatencyRow {
    /// Probe header, e.g. `VPS-01 · db`
    pub fn title(&self) -> String {
        format!("{} · {}", self.endpoint_name, self.label)
    }

    /// Probe target, e.g. `10.0.0.1:5432`
    pub fn target(&self) -> String {
        format!("{}:{}", self.host, format_optional(self.port))
    }

    pub fn severities(&self) -> LatencySeverities {
        LatencySeverities {
            last: latency_severity(self.last_ms),
            p50: latency_severity(self.p50_ms),
            p95: latency_severity(self.p95_ms),
        }
    }
}

/// Everything derived from one cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetView {
    pub fleet_cards: Vec<FleetCard>,
    pub latency_rows: Vec<LatencyRow>,
    pub connected: bool,
}

impl FleetView {
    pub fn healthy_count(&self) -> usize {
        self.fleet_cards.iter().filter(|card| card.healthy).count()
    }
}

/// A view stamped with the cycle that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedView {
    pub cycle: u64,
    pub published_at: DateTime<Utc>,
    pub view: FleetView,
}

/// Single overwrite-only slot holding the latest complete view
///
/// Publishing is monotonic in cycle number: a cycle that finishes after a
/// newer one has already published is discarded.
#[derive(Debug, Default)]
pub struct ViewSlot {
    current: RwLock<Option<Arc<PublishedView>>>,
}

impl ViewSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the slot already holds `cycle` or a newer one
    pub fn publish(&self, cycle: u64, view: FleetView) -> bool {
        let mut current = self.current.write();
        if let Some(existing) = current.as_ref() {
            if existing.cycle >= cycle {
                return false;
            }
        }

        *current = Some(Arc::new(PublishedView {
            cycle,
            published_at: Utc::now(),
            view,
        }));
        true
    }

    pub fn latest(&self) -> Option<Arc<PublishedView>> {
        self.current.read().clone()
    }

    pub fn latest_cycle(&self) -> Option<u64> {
        self.current.read().as_ref().map(|published| published.cycle)
    }
}
