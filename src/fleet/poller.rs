use super::fetcher::StatusFetcher;
use super::types::{Endpoint, FleetOutcome};
use crate::logger::{self, LogTag};
use futures::future::join_all;

/// Fetch every endpoint concurrently and collect one outcome per endpoint
///
/// All requests are issued before any is awaited; the returned vector is in
/// registry order regardless of completion order. Never fails as a unit.
pub async fn poll_fleet(fetcher: &dyn StatusFetcher, endpoints: &[Endpoint]) -> Vec<FleetOutcome> {
    let fetches = endpoints
        .iter()
        .map(|endpoint| poll_endpoint(fetcher, endpoint));

    join_all(fetches).await
}

async fn poll_endpoint(fetcher: &dyn StatusFetcher, endpoint: &Endpoint) -> FleetOutcome {
    match fetcher.fetch_status(endpoint).await {
        Ok(payload) => {
            logger::debug(
                LogTag::Poller,
                &format!(
                    "{} ok (uptime={:?}, probes={})",
                    endpoint.name,
                    payload.uptime_seconds,
                    payload.probes.len()
                ),
            );
            FleetOutcome::Success(payload)
        }
        Err(e) => {
            logger::debug(
                LogTag::Poller,
                &format!("{} failed [{}]: {}", endpoint.name, e.kind(), e),
            );
            FleetOutcome::Failure
        }
    }
}
