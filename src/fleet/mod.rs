//! Fleet poll / aggregate / publish pipeline
//!
//! registry → poller (fetcher per endpoint, concurrently) → aggregator →
//! view slot, driven by the refresh loop in `service`.

pub mod aggregator;
pub mod classify;
pub mod fetcher;
pub mod poller;
pub mod registry;
pub mod service;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use aggregator::aggregate;
pub use classify::Severity;
pub use fetcher::{HttpStatusFetcher, StatusFetcher};
pub use poller::poll_fleet;
pub use registry::EndpointRegistry;
pub use service::{LoopState, RefreshLoop};
pub use types::{Endpoint, FleetOutcome, ProbeResult, StatusPayload};
pub use view::{FleetCard, FleetView, LatencyRow, LatencySeverities, PublishedView, ViewSlot};
