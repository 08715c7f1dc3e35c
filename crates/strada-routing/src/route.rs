//! Routes and the route table.
//!
//! A [`Route`] binds a [`PathMatcher`] to a callback; the [`RouteTable`]
//! keeps routes in insertion order, which is the only priority the router
//! knows.

use std::fmt;
use std::sync::Arc;

use crate::matcher::PathMatcher;

/// The type for route callback functions.
///
/// A callback receives the dispatched path, the captured groups, and the
/// matcher that accepted the path. It is a plain function value, with no
/// implicit receiver, wrapped in an `Arc` so it can be shared across
/// threads.
pub type RouteCallback = Arc<dyn Fn(&str, &[Option<String>], &dyn PathMatcher) + Send + Sync>;

/// A single route binding a matcher to a callback.
#[derive(Clone)]
pub struct Route {
    matcher: Arc<dyn PathMatcher>,
    callback: RouteCallback,
}

impl Route {
    /// Creates a route from a shared matcher and callback.
    pub fn new(matcher: Arc<dyn PathMatcher>, callback: RouteCallback) -> Self {
        Self { matcher, callback }
    }

    /// Returns the matcher.
    pub fn matcher(&self) -> &Arc<dyn PathMatcher> {
        &self.matcher
    }

    /// Returns the callback.
    pub fn callback(&self) -> &RouteCallback {
        &self.callback
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("matcher", &self.matcher.as_str())
            .finish_non_exhaustive()
    }
}

/// An insertion-ordered collection of routes.
///
/// Duplicate matchers are permitted; only the first is ever reachable by
/// dispatch, and removal takes out at most the first entry whose matcher's
/// canonical form equals the given pattern.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a route. Never fails, even for duplicate patterns.
    pub fn add(&mut self, matcher: Arc<dyn PathMatcher>, callback: RouteCallback) {
        self.routes.push(Route::new(matcher, callback));
    }

    /// Removes the first route whose matcher's canonical form equals
    /// `pattern`.
    ///
    /// Returns `true` if a route was removed; a no-op when absent. At most
    /// one entry is removed even if duplicates exist.
    pub fn remove(&mut self, pattern: &str) -> bool {
        match self
            .routes
            .iter()
            .position(|route| route.matcher().as_str() == pattern)
        {
            Some(index) => {
                self.routes.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes all routes.
    pub fn clear(&mut self) {
        self.routes.clear();
    }

    /// Returns the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the table holds no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns the routes in insertion order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns a snapshot of the table.
    ///
    /// Snapshots are cheap (matcher and callback are shared) and let
    /// dispatch iterate without holding any lock, so a callback may mutate
    /// the live table mid-dispatch.
    pub fn snapshot(&self) -> Vec<Route> {
        self.routes.clone()
    }
}
