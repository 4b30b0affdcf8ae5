//! Route generation subsystem.
//!
//! # Data Flow
//! ```text
//! clear(output_path)
//!     → RouteProvider::get_routes() (table order)
//!     → for each route:
//!         ExclusionSet match?         → EXCLUDED   (log, continue)
//!         unresolved parameters?      → DYNAMIC    (log, continue)
//!         RequestSimulator::simulate
//!         raised error?               → abort run with GenerateError::Handler
//!         3xx?                        → REDIRECTED (log, continue)
//!         otherwise                   → WRITTEN    ({base}/{uri}/index.html)
//!     → GenerationReport
//! ```
//!
//! # Design Decisions
//! - Strictly sequential: one route resolves before the next is requested
//! - Fail fast: the first raised error or filesystem error ends the run
//! - Files written before an abort stay on disk; reruns start from a clean tree
//! - No retries anywhere

pub mod error;
pub mod pipeline;
pub mod report;

pub use error::GenerateError;
pub use pipeline::Generator;
pub use report::{GenerationReport, RouteOutcome};
