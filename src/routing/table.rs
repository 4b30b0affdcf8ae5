//! Route table that records what it registers.
//!
//! # Responsibilities
//! - Register handlers into an axum `Router`
//! - Remember every (method, uri) pair in registration order
//! - Hand out an in-process simulator over the finished router
//!
//! # Design Decisions
//! - axum does not expose its route list, so enumeration is recorded here
//! - Only stateless routers; stateful apps apply `with_state` through `map_router`

use axum::handler::Handler;
use axum::http::Method;
use axum::routing::{self, MethodFilter};
use axum::Router;

use crate::http::InProcessSimulator;
use crate::routing::route::{normalize_uri, Route, RouteProvider};

/// An axum router paired with the list of routes registered on it.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    router: Router,
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a GET handler.
    pub fn get<H, T>(self, uri: &str, handler: H) -> Self
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        self.route(MethodFilter::GET, uri, handler)
    }

    /// Register a POST handler.
    pub fn post<H, T>(self, uri: &str, handler: H) -> Self
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        self.route(MethodFilter::POST, uri, handler)
    }

    /// Register a PUT handler.
    pub fn put<H, T>(self, uri: &str, handler: H) -> Self
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        self.route(MethodFilter::PUT, uri, handler)
    }

    /// Register a DELETE handler.
    pub fn delete<H, T>(self, uri: &str, handler: H) -> Self
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        self.route(MethodFilter::DELETE, uri, handler)
    }

    /// Register a handler for every method in `filter`.
    ///
    /// One route is recorded per method the filter accepts.
    ///
    /// # Panics
    /// If the same method/uri pair is registered twice, mirroring `Router::route`.
    pub fn route<H, T>(mut self, filter: MethodFilter, uri: &str, handler: H) -> Self
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        let uri = normalize_uri(uri);
        self.router = self.router.route(&uri, routing::on(filter, handler));

        for (single, method) in filtered_methods() {
            if single.or(filter) == filter {
                self.routes.push(Route {
                    method,
                    uri: uri.clone(),
                });
            }
        }
        self
    }

    /// Apply a transformation to the underlying router (layers, fallback, ...).
    ///
    /// Routes added here are not recorded and will not be generated.
    pub fn map_router<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Router) -> Router,
    {
        self.router = f(self.router);
        self
    }

    /// The underlying router, for serving it over a real listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Build an in-process simulator over this table's router.
    pub fn simulator(&self, max_body_size: usize) -> InProcessSimulator {
        InProcessSimulator::new(self.router.clone(), max_body_size)
    }
}

fn filtered_methods() -> [(MethodFilter, Method); 9] {
    [
        (MethodFilter::GET, Method::GET),
        (MethodFilter::HEAD, Method::HEAD),
        (MethodFilter::POST, Method::POST),
        (MethodFilter::PUT, Method::PUT),
        (MethodFilter::PATCH, Method::PATCH),
        (MethodFilter::DELETE, Method::DELETE),
        (MethodFilter::OPTIONS, Method::OPTIONS),
        (MethodFilter::TRACE, Method::TRACE),
        (MethodFilter::CONNECT, Method::CONNECT),
    ]
}

impl RouteProvider for RouteTable {
    fn routes(&self) -> Vec<Route> {
        self.routes.clone()
    }
}
