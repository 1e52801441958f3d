/// API response type definitions
///
/// The fleet response is the published view model plus the display hints a
/// view layer needs to render it without re-deriving anything.
use crate::fleet::classify::{
    connectivity_label, connectivity_severity, format_latency, format_optional, format_samples,
    format_uptime, health_label, Severity,
};
use crate::fleet::{FleetCard, FleetView, LatencyRow, LatencySeverities, PublishedView};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ================================================================================================
// Fleet View
// ================================================================================================

/// GET /api/fleet
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetResponse {
    /// `None` until the first cycle publishes
    pub cycle: Option<u64>,
    pub published_at: Option<DateTime<Utc>>,
    /// Server clock at request time, `HH:MM:SS`
    pub clock: String,
    pub connected: bool,
    pub connectivity_label: &'static str,
    pub connectivity_severity: Severity,
    pub fleet_cards: Vec<FleetCardResponse>,
    pub latency_rows: Vec<LatencyRowResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetCardResponse {
    #[serde(flatten)]
    pub card: FleetCard,
    pub badge: &'static str,
    pub severity: Severity,
    pub uptime_text: String,
    pub port_text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyRowResponse {
    #[serde(flatten)]
    pub row: LatencyRow,
    pub title: String,
    pub target: String,
    pub severities: LatencySeverities,
    pub last_text: String,
    pub p50_text: String,
    pub p95_text: String,
    pub samples_text: String,
}

impl From<FleetCard> for FleetCardResponse {
    fn from(card: FleetCard) -> Self {
        Self {
            badge: health_label(card.healthy),
            severity: card.severity(),
            uptime_text: format_uptime(card.uptime_seconds),
            port_text: format_optional(card.listen_port),
            card,
        }
    }
}

impl From<LatencyRow> for LatencyRowResponse {
    fn from(row: LatencyRow) -> Self {
        Self {
            title: row.title(),
            target: row.target(),
            severities: row.severities(),
            last_text: format_latency(row.last_ms),
            p50_text: format_latency(row.p50_ms),
            p95_text: format_latency(row.p95_ms),
            samples_text: format_samples(row.samples),
            row,
        }
    }
}

impl FleetResponse {
    /// Build from the slot contents; an empty slot yields an empty, disconnected view
    pub fn from_published(published: Option<&PublishedView>, clock: String) -> Self {
        let (cycle, published_at, view) = match published {
            Some(p) => (Some(p.cycle), Some(p.published_at), p.view.clone()),
            None => (None, None, FleetView::default()),
        };

        Self {
            cycle,
            published_at,
            clock,
            connected: view.connected,
            connectivity_label: connectivity_label(view.connected),
            connectivity_severity: connectivity_severity(view.connected),
            fleet_cards: view.fleet_cards.into_iter().map(Into::into).collect(),
            latency_rows: view.latency_rows.into_iter().map(Into::into).collect(),
        }
    }
}

// ================================================================================================
// Health / Errors
// ================================================================================================

/// GET /api/health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime_seconds: u64,
    /// Latest published cycle, if any
    pub cycle: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
}
