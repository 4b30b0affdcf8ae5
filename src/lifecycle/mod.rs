//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     GeneratorConfig → route source + simulator → Generator
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl+C) → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     broadcast → Generator stops before the next route → exit non-zero
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Cancellation only takes effect between routes
//! - No cleanup on cancel: whatever is on disk stays on disk

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{run_loopback, StartupError};
