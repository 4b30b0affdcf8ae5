//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! generator / http / lifecycle
//!     → tracing events (uri, request_id, status fields)
//!     → logging.rs (EnvFilter + fmt layer)
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - Structured fields, human-readable format: output is read by a person at a terminal
//! - `RUST_LOG` overrides the configured level

pub mod logging;

pub use logging::init_logging;
