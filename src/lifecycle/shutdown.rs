//! Cancellation of a generation run.
//!
//! The generator checks its receiver between routes, so a signal never
//! interrupts a write in progress.

use tokio::sync::broadcast;

/// Handle for stopping a run early. Clones share one channel.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to hand to `Generator::with_shutdown`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscribed run to stop.
    ///
    /// Returns false when no run was listening, e.g. before generation
    /// started or after it finished.
    pub fn trigger(&self) -> bool {
        self.tx.send(()).is_ok()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
