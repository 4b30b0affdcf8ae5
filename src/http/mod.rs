//! Request simulation subsystem.
//!
//! # Data Flow
//! ```text
//! Route URI + GenerationConfig
//!     → request.rs (build GET request, add request ID, attach generation flags)
//!     → simulator.rs (RequestSimulator boundary)
//!         → in_process.rs (axum Router driven by tower oneshot, no socket)
//!         → loopback.rs (reqwest against a locally running instance)
//!     → response.rs (SimulatedResponse: status, headers, body, raised error)
//!     → Return to the generation pipeline
//! ```
//!
//! # Design Decisions
//! - Simulation never fails at the type level; failures travel in `raised_error`
//! - Redirects are never followed
//! - One request at a time; the caller awaits each response before the next

pub mod in_process;
pub mod loopback;
pub mod request;
pub mod response;
pub mod simulator;

pub use in_process::InProcessSimulator;
pub use loopback::LoopbackSimulator;
pub use request::{RequestId, X_REQUEST_ID};
pub use response::{RaisedError, SimulatedResponse};
pub use simulator::{GenerationConfig, RequestSimulator};
