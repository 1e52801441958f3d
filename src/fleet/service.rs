use super::aggregator::aggregate;
use super::fetcher::StatusFetcher;
use super::poller::poll_fleet;
use super::registry::EndpointRegistry;
use super::view::{FleetView, ViewSlot};
use crate::logger::{self, LogTag};
use crate::shutdown::Shutdown;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Refreshing,
}

/// Poll → aggregate → publish, on a fixed interval
///
/// Each tick spawns its own cycle, so a slow cycle never delays the next one.
/// Cycles are numbered; the view slot drops a publish from a cycle older than
/// the one it already holds.
pub struct RefreshLoop {
    registry: Arc<EndpointRegistry>,
    fetcher: Arc<dyn StatusFetcher>,
    slot: Arc<ViewSlot>,
    next_cycle: AtomicU64,
    in_flight: AtomicUsize,
    /// Health per endpoint as of the last published cycle
    last_health: Mutex<Option<Vec<bool>>>,
}

impl RefreshLoop {
    pub fn new(
        registry: Arc<EndpointRegistry>,
        fetcher: Arc<dyn StatusFetcher>,
        slot: Arc<ViewSlot>,
    ) -> Self {
        Self {
            registry,
            fetcher,
            slot,
            next_cycle: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
            last_health: Mutex::new(None),
        }
    }

    pub fn slot(&self) -> &Arc<ViewSlot> {
        &self.slot
    }

    pub fn state(&self) -> LoopState {
        if self.in_flight.load(Ordering::SeqCst) > 0 {
            LoopState::Refreshing
        } else {
            LoopState::Idle
        }
    }

    /// Run one full cycle; returns whether its view was published
    pub async fn run_cycle(&self) -> bool {
        let cycle = self.next_cycle.fetch_add(1, Ordering::SeqCst);
        let _in_flight = InFlight::enter(&self.in_flight);

        let endpoints = self.registry.endpoints();
        let outcomes = poll_fleet(self.fetcher.as_ref(), endpoints).await;
        let view = aggregate(endpoints, &outcomes);

        self.publish(cycle, view)
    }

    /// Start a cycle in the background
    pub fn trigger(self: &Arc<Self>) -> JoinHandle<bool> {
        let this = Arc::clone(self);
        tokio::spawn(async move { this.run_cycle().await })
    }

    fn publish(&self, cycle: u64, view: FleetView) -> bool {
        let health: Vec<bool> = view.fleet_cards.iter().map(|card| card.healthy).collect();

        // held across publish so transitions are logged in publish order
        let mut last_health = self.last_health.lock();

        if logger::is_debug_enabled(LogTag::Fleet) {
            logger::log_cycle_summary(cycle, &view);
        }

        if !self.slot.publish(cycle, view) {
            logger::debug(
                LogTag::Fleet,
                &format!("Discarding stale cycle {} (a newer cycle already published)", cycle),
            );
            return false;
        }

        if let Some(previous) = last_health.as_ref() {
            for ((endpoint, was), now) in self.registry.iter().zip(previous).zip(&health) {
                if was != now {
                    logger::log_endpoint_transition(&endpoint.name, *now);
                }
            }
        } else {
            for (endpoint, now) in self.registry.iter().zip(&health) {
                if !now {
                    logger::log_endpoint_transition(&endpoint.name, false);
                }
            }
        }
        *last_health = Some(health);

        true
    }

    /// Tick forever until shutdown
    ///
    /// The first tick fires immediately, so cycle 0 runs at startup.
    pub async fn run(self: Arc<Self>, period: Duration, shutdown: Arc<Shutdown>) {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        logger::info(
            LogTag::Fleet,
            &format!(
                "Starting refresh loop ({} endpoints, interval={}ms)",
                self.registry.len(),
                period.as_millis()
            ),
        );

        loop {
            tokio::select! {
                _ = shutdown.wait() => {
                    logger::info(LogTag::Fleet, "Refresh loop shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    self.trigger();
                }
            }
        }
    }
}

/// Counts a cycle as running for as long as it is alive
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
