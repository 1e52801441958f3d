use super::types::{Endpoint, FleetOutcome, ProbeResult};
use super::view::{FleetCard, FleetView, LatencyRow};

/// Build the cycle's view model from outcomes aligned to `endpoints`
///
/// Pure: the same input always yields the same view. Cards follow registry
/// order; rows follow registry order, then each endpoint's probe order.
pub fn aggregate(endpoints: &[Endpoint], outcomes: &[FleetOutcome]) -> FleetView {
    debug_assert_eq!(
        endpoints.len(),
        outcomes.len(),
        "one outcome per endpoint"
    );

    let mut view = FleetView::default();

    for (endpoint, outcome) in endpoints.iter().zip(outcomes) {
        match outcome.payload() {
            Some(payload) => {
                view.fleet_cards.push(FleetCard::up(
                    &endpoint.name,
                    &endpoint.base_url,
                    payload.uptime_seconds,
                    payload.listen_port,
                ));
                view.latency_rows.extend(
                    payload
                        .probes
                        .iter()
                        .map(|probe| latency_row(&endpoint.name, probe)),
                );
            }
            None => {
                view.fleet_cards
                    .push(FleetCard::down(&endpoint.name, &endpoint.base_url));
            }
        }
    }
    view.connected = outcomes.iter().any(FleetOutcome::is_success);

    view
}

fn latency_row(endpoint_name: &str, probe: &ProbeResult) -> LatencyRow {
    LatencyRow {
        endpoint_name: endpoint_name.to_string(),
        label: probe.label.clone(),
        host: probe.host.clone(),
        port: probe.port,
        last_ms: probe.last_ms,
        p50_ms: probe.p50_ms,
        p95_ms: probe.p95_ms,
        samples: probe.samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::classify::Severity;
    use crate::fleet::types::StatusPayload;

    fn endpoints(names: &[&str]) -> Vec<Endpoint> {
        names
            .iter()
            .map(|name| Endpoint::new(*name, format!("http://{}.local:7777", name)))
            .collect()
    }

    fn probe(label: &str, last_ms: f64) -> ProbeResult {
        ProbeResult {
            label: label.to_string(),
            host: "10.0.0.1".to_string(),
            port: Some(5432),
            last_ms: Some(last_ms),
            p50_ms: Some(last_ms),
            p95_ms: Some(last_ms),
            samples: 10,
        }
    }

    #[test]
    fn test_empty_registry() {
        let view = aggregate(&[], &[]);
        assert!(view.fleet_cards.is_empty());
        assert!(view.latency_rows.is_empty());
        assert!(!view.connected);
    }

    #[test]
    fn test_partial_failure() {
        let endpoints = endpoints(&["A", "B"]);
        let outcomes = vec![
            FleetOutcome::Success(StatusPayload {
                uptime_seconds: Some(100),
                listen_port: Some(7777),
                probes: vec![],
            }),
            FleetOutcome::Failure,
        ];

        let view = aggregate(&endpoints, &outcomes);

        assert!(view.connected);
        assert!(view.latency_rows.is_empty());
        assert_eq!(
            view.fleet_cards,
            vec![
                FleetCard::up("A", "http://A.local:7777", Some(100), Some(7777)),
                FleetCard::down("B", "http://B.local:7777"),
            ]
        );
    }

    #[test]
    fn test_probe_row_copied_verbatim() {
        let endpoints = endpoints(&["A"]);
        let outcomes = vec![FleetOutcome::Success(StatusPayload {
            uptime_seconds: None,
            listen_port: None,
            probes: vec![ProbeResult {
                label: "db".to_string(),
                host: "10.0.0.1".to_string(),
                port: Some(5432),
                last_ms: Some(3.2),
                p50_ms: Some(4.0),
                p95_ms: Some(9.9),
                samples: 50,
            }],
        })];

        let view = aggregate(&endpoints, &outcomes);

        assert_eq!(
            view.latency_rows,
            vec![LatencyRow {
                endpoint_name: "A".to_string(),
                label: "db".to_string(),
                host: "10.0.0.1".to_string(),
                port: Some(5432),
                last_ms: Some(3.2),
                p50_ms: Some(4.0),
                p95_ms: Some(9.9),
                samples: 50,
            }]
        );

        let classes = view.latency_rows[0].severities();
        assert_eq!(classes.last, Severity::Good);
        assert_eq!(classes.p50, Severity::Good);
        assert_eq!(classes.p95, Severity::Good);

        // healthy card keeps its absent metadata absent
        assert!(view.fleet_cards[0].healthy);
        assert_eq!(view.fleet_cards[0].uptime_seconds, None);
    }

    #[test]
    fn test_all_down() {
        let endpoints = endpoints(&["A", "B", "C"]);
        let outcomes = vec![FleetOutcome::Failure; 3];

        let view = aggregate(&endpoints, &outcomes);

        assert!(!view.connected);
        assert!(view.latency_rows.is_empty());
        assert_eq!(view.fleet_cards.len(), 3);
        assert!(view.fleet_cards.iter().all(|card| !card.healthy
            && card.uptime_seconds.is_none()
            && card.listen_port.is_none()));
    }

    #[test]
    fn test_row_order_follows_registry_then_probe_order() {
        let endpoints = endpoints(&["A", "B", "C"]);
        let outcomes = vec![
            FleetOutcome::Success(StatusPayload {
                probes: vec![probe("a2", 1.0), probe("a1", 2.0)],
                ..StatusPayload::default()
            }),
            FleetOutcome::Failure,
            FleetOutcome::Success(StatusPayload {
                probes: vec![probe("c1", 30.0)],
                ..StatusPayload::default()
            }),
        ];

        let view = aggregate(&endpoints, &outcomes);

        let rows: Vec<(&str, &str)> = view
            .latency_rows
            .iter()
            .map(|row| (row.endpoint_name.as_str(), row.label.as_str()))
            .collect();
        assert_eq!(rows, vec![("A", "a2"), ("A", "a1"), ("C", "c1")]);
        assert_eq!(view.healthy_count(), 2);
    }

    #[test]
    fn test_aggregate_is_deterministic() {
        let endpoints = endpoints(&["A", "B"]);
        let outcomes = vec![
            FleetOutcome::Success(StatusPayload {
                uptime_seconds: Some(9),
                listen_port: Some(1),
                probes: vec![probe("x", 12.5)],
            }),
            FleetOutcome::Failure,
        ];

        assert_eq!(
            aggregate(&endpoints, &outcomes),
            aggregate(&endpoints, &outcomes)
        );
    }
}
