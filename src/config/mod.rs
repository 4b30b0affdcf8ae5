//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, normalise excluded paths)
//!     → validation.rs (semantic checks)
//!     → GeneratorConfig (validated, immutable)
//!     → read once at the start of a generation run
//! ```
//!
//! # Design Decisions
//! - Config is read once per run; nothing is reloaded mid-run
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::GeneratorConfig;
pub use schema::GenerationFlags;
pub use schema::SourceConfig;
pub use schema::TimeoutConfig;
pub use schema::ObservabilityConfig;
