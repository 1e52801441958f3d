use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

// ═══════════════════════════════════════════════════════════════════════════════
// SHUTDOWN SIGNAL
// ═══════════════════════════════════════════════════════════════════════════════
//
// One flag + one Notify shared by every long-running task. Once triggered it
// stays triggered, so a task that starts waiting late still returns at once.
// In-flight refresh cycles are not cancelled; they die with the runtime.
// ═══════════════════════════════════════════════════════════════════════════════

pub static SHUTDOWN: Lazy<Arc<Shutdown>> = Lazy::new(|| Arc::new(Shutdown::new()));

#[derive(Debug, Default)]
pub struct Shutdown {
    requested: AtomicBool,
    notify: Notify,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.requested.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Resolve once `trigger` has been called (immediately if it already was)
    pub async fn wait(&self) {
        let notified = self.notify.notified();
        tokio::pin!(notified);
        // register before checking the flag so a concurrent trigger is not missed
        notified.as_mut().enable();

        if self.is_requested() {
            return;
        }
        notified.await;
    }
}

/// Trigger the global shutdown on Ctrl-C
pub fn install_ctrlc_handler() -> Result<(), String> {
    let shutdown = Arc::clone(&SHUTDOWN);
    ctrlc::set_handler(move || {
        if shutdown.is_requested() {
            // second Ctrl-C: stop waiting for a graceful exit
            std::process::exit(130);
        }
        shutdown.trigger();
    })
    .map_err(|e| format!("Failed to install Ctrl-C handler: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_wait_returns_after_trigger() {
        let shutdown = Arc::new(Shutdown::new());
        let waiter = {
            let shutdown = Arc::clone(&shutdown);
            tokio::spawn(async move { shutdown.wait().await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        shutdown.trigger();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should finish")
            .unwrap();
    }

    #[tokio::test]
    async fn test_late_waiter_returns_immediately() {
        let shutdown = Shutdown::new();
        shutdown.trigger();
        assert!(shutdown.is_requested());

        tokio::time::timeout(Duration::from_millis(100), shutdown.wait())
            .await
            .expect("already triggered");
    }
}
