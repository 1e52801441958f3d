//! Special logging functions for specific use cases

use super::tags::LogTag;
use crate::fleet::classify::{connectivity_label, format_latency};
use crate::fleet::FleetView;
use crate::logger;

/// One-line cycle summary: connectivity, healthy count, worst p95
pub fn log_cycle_summary(cycle: u64, view: &FleetView) {
    let worst_p95 = view
        .latency_rows
        .iter()
        .filter_map(|row| row.p95_ms)
        .fold(None, |worst: Option<f64>, ms| {
            Some(worst.map_or(ms, |w| w.max(ms)))
        });

    logger::debug(
        LogTag::Fleet,
        &format!(
            "cycle {}: {} ({}/{} up, {} probes, worst p95 {})",
            cycle,
            connectivity_label(view.connected),
            view.healthy_count(),
            view.fleet_cards.len(),
            view.latency_rows.len(),
            format_latency(worst_p95)
        ),
    );
}

/// Endpoint went up or down between two published cycles
pub fn log_endpoint_transition(name: &str, healthy: bool) {
    if healthy {
        logger::info(LogTag::Fleet, &format!("{} is back UP", name));
    } else {
        logger::warning(LogTag::Fleet, &format!("{} is DOWN", name));
    }
}
