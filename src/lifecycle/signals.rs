//! OS signal handling.

use crate::lifecycle::shutdown::Shutdown;

/// Trigger `shutdown` on the first Ctrl+C. Runs as a background task.
pub fn spawn_ctrl_c_handler(shutdown: Shutdown) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                if shutdown.trigger() {
                    tracing::warn!("Interrupt received, stopping after the current route");
                } else {
                    tracing::debug!("Interrupt received with no generation in progress");
                }
            }
            Err(e) => tracing::error!(error = %e, "Failed to install Ctrl+C handler"),
        }
    })
}
