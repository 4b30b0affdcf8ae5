//! Static route generator library.
//!
//! Freezes the GET routes of an axum application into a tree of
//! `{uri}/index.html` files by simulating each request in-process.

pub mod config;
pub mod generator;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod output;
pub mod routing;

pub use config::GeneratorConfig;
pub use generator::{GenerateError, GenerationReport, Generator};
pub use http::{GenerationConfig, InProcessSimulator, LoopbackSimulator, RaisedError};
pub use lifecycle::Shutdown;
pub use routing::{Route, RouteProvider, RouteTable};
