/// Plain-text rendering of a fleet view for the console (`--once` mode)
///
/// Pure string building; pill and badge colors come from the severity tokens.
use crate::fleet::classify::{
    connectivity_label, connectivity_severity, format_latency, format_optional, format_samples,
    format_uptime, health_label, Severity,
};
use crate::fleet::{FleetCard, FleetView, LatencyRow};
use colored::*;

fn paint(text: &str, severity: Severity, colorize: bool) -> String {
    if !colorize {
        return text.to_string();
    }
    match severity {
        Severity::Ok | Severity::Good => text.bright_green().to_string(),
        Severity::Warn => text.bright_yellow().to_string(),
        Severity::Bad => text.bright_red().to_string(),
    }
}

fn render_card(card: &FleetCard, colorize: bool) -> String {
    format!(
        "  {:<12} {:<32} {}  uptime {:<10} listen {}",
        card.name,
        card.base_url,
        paint(&format!("{:<4}", health_label(card.healthy)), card.severity(), colorize),
        format_uptime(card.uptime_seconds),
        format_optional(card.listen_port)
    )
}

fn render_row(row: &LatencyRow, colorize: bool) -> String {
    let classes = row.severities();
    format!(
        "  {:<28} {:<22} {}  {}  {}  {}",
        row.title(),
        row.target(),
        paint(&format!("last {:<9}", format_latency(row.last_ms)), classes.last, colorize),
        paint(&format!("p50 {:<9}", format_latency(row.p50_ms)), classes.p50, colorize),
        paint(&format!("p95 {:<9}", format_latency(row.p95_ms)), classes.p95, colorize),
        format_samples(row.samples)
    )
}

/// Full dashboard text for one view, headed by `clock`
pub fn render_view(view: &FleetView, clock: &str, colorize: bool) -> String {
    let mut lines = Vec::with_capacity(view.fleet_cards.len() + view.latency_rows.len() + 5);

    lines.push(format!(
        "FleetBoard  {}  [{}]",
        clock,
        paint(
            connectivity_label(view.connected),
            connectivity_severity(view.connected),
            colorize
        )
    ));

    lines.push("FLEET".to_string());
    if view.fleet_cards.is_empty() {
        lines.push("  (no endpoints configured)".to_string());
    }
    lines.extend(view.fleet_cards.iter().map(|card| render_card(card, colorize)));

    lines.push("LATENCY".to_string());
    if view.latency_rows.is_empty() {
        lines.push("  (no probes reported)".to_string());
    }
    lines.extend(view.latency_rows.iter().map(|row| render_row(row, colorize)));

    lines.join("\n")
}
