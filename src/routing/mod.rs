//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Application route registration
//!     → table.rs (RouteTable: axum Router + recorded (method, uri) list)
//!     → route.rs (RouteProvider: enumerate routes in registration order)
//!     → filter to GET
//!     → matcher.rs (ExclusionSet: skip configured prefixes)
//!     → Return: routes to simulate
//! ```
//!
//! # Design Decisions
//! - The route list is recorded at registration, never reflected out of axum
//! - URIs are normalised once (single leading '/', no trailing '/')
//! - Exclusion is literal prefix matching on segment boundaries, no regex
//! - Deterministic: same table always enumerates in the same order

pub mod matcher;
pub mod route;
pub mod table;

pub use matcher::{is_excluded, ExclusionSet};
pub use route::{normalize_uri, Route, RouteProvider, StaticRouteList};
pub use table::RouteTable;
