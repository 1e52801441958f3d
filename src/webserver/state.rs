/// Shared application state for the webserver
///
/// Route handlers only read the view slot; the refresh loop is the sole writer.
use crate::fleet::ViewSlot;
use std::sync::Arc;

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    /// Latest published fleet view
    pub slot: Arc<ViewSlot>,

    /// Server startup time
    pub startup_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(slot: Arc<ViewSlot>) -> Self {
        Self {
            slot,
            startup_time: chrono::Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        (chrono::Utc::now() - self.startup_time)
            .num_seconds()
            .max(0) as u64
    }
}
