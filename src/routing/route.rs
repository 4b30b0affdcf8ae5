//! Route definitions and enumeration.

use axum::http::Method;

/// A registered endpoint: method plus URI pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub uri: String,
}

impl Route {
    /// Create a route. The URI is normalised with [`normalize_uri`].
    pub fn new(method: Method, uri: impl AsRef<str>) -> Self {
        Self {
            method,
            uri: normalize_uri(uri.as_ref()),
        }
    }

    /// Shorthand for a GET route.
    pub fn get(uri: impl AsRef<str>) -> Self {
        Self::new(Method::GET, uri)
    }

    /// Returns false if the URI still contains a path parameter
    /// (`{id}`, `{*rest}`, or the older `:id` / `*rest` forms).
    pub fn is_static(&self) -> bool {
        self.uri.split('/').all(|segment| {
            !(segment.contains('{') || segment.starts_with(':') || segment.starts_with('*'))
        })
    }
}

/// Normalise a URI to a single leading '/', no trailing '/' and no empty segments.
///
/// `""`, `"/"` and `"//"` all become `"/"`; `"about/"` becomes `"/about"`.
pub fn normalize_uri(uri: &str) -> String {
    let segments: Vec<&str> = uri.trim().split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Source of the application's route table.
pub trait RouteProvider {
    /// All routes, in the table's natural enumeration order.
    fn routes(&self) -> Vec<Route>;

    /// GET routes only, order preserved.
    fn get_routes(&self) -> Vec<Route> {
        self.routes()
            .into_iter()
            .filter(|route| route.method == Method::GET)
            .collect()
    }
}

impl RouteProvider for Vec<Route> {
    fn routes(&self) -> Vec<Route> {
        self.clone()
    }
}

/// A fixed list of GET routes, typically from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticRouteList {
    routes: Vec<Route>,
}

impl StaticRouteList {
    pub fn new<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            routes: uris.into_iter().map(Route::get).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteProvider for StaticRouteList {
    fn routes(&self) -> Vec<Route> {
        self.routes.clone()
    }
}
