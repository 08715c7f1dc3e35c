//! The router: lifecycle control and dispatch.
//!
//! [`Router`] owns the route table and configuration, binds to the session
//! history's navigation notifications while active, and dispatches paths
//! against the table in insertion order; first match wins.

use std::fmt;
use std::sync::{Arc, RwLock};

use tracing::{debug, trace, warn};
use uuid::Uuid;

use strada_core::{RouterConfig, StradaResult};
use strada_history::SessionHistory;

use crate::matcher::{PathMatcher, RegexMatcher};
use crate::path::{canonical_pathname, clear_slashes};
use crate::query::QueryParams;
use crate::route::{RouteCallback, RouteTable};

/// The lifecycle of a router instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Created (or destroyed) and not bound to the session history.
    Uninitialized,
    /// Bound to the session history and dispatching navigation events.
    Active,
}

struct RouterState {
    config: RouterConfig,
    routes: RouteTable,
    lifecycle: LifecycleState,
}

struct RouterInner<H> {
    history: Arc<H>,
    state: RwLock<RouterState>,
    // Unique per router so independent instances can share one history.
    subscription_id: String,
}

/// A client-side path router bound to a session history.
///
/// A `Router` is an explicit instance owned by the caller; any number of
/// independent routers may coexist. Cloning is cheap and yields a handle
/// to the same router, which is how callbacks get mutating access to the
/// table they were dispatched from.
///
/// Mutating operations return `&Self` (or `StradaResult<&Self>` where
/// percent-decoding may fail) to support chaining.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use strada_history::MemoryHistory;
/// use strada_routing::{RegexMatcher, Router};
///
/// let router = Router::new(Arc::new(MemoryHistory::new()));
/// router.init(None);
///
/// router.add(
///     RegexMatcher::new(r"^user/(\d+)$").unwrap(),
///     Arc::new(|path, captures, _pattern| {
///         println!("{path}: user {:?}", captures[0]);
///     }),
/// );
///
/// router.navigate("user/42").unwrap();
/// router.destroy();
/// ```
pub struct Router<H> {
    inner: Arc<RouterInner<H>>,
}

impl<H> Clone for Router<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<H> fmt::Debug for Router<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.read().expect("router lock poisoned");
        f.debug_struct("Router")
            .field("lifecycle", &state.lifecycle)
            .field("config", &state.config)
            .field("routes", &state.routes.len())
            .finish_non_exhaustive()
    }
}

impl<H: SessionHistory + Send + Sync + 'static> Router<H> {
    /// Creates an uninitialized router over the given session history.
    pub fn new(history: Arc<H>) -> Self {
        Self {
            inner: Arc::new(RouterInner {
                history,
                state: RwLock::new(RouterState {
                    config: RouterConfig::default(),
                    routes: RouteTable::new(),
                    lifecycle: LifecycleState::Uninitialized,
                }),
                subscription_id: format!("strada-router-{}", Uuid::new_v4()),
            }),
        }
    }

    /// Returns the session history this router is bound to.
    pub fn history(&self) -> &Arc<H> {
        &self.inner.history
    }

    /// Returns the current lifecycle state.
    pub fn lifecycle(&self) -> LifecycleState {
        self.inner
            .state
            .read()
            .expect("router lock poisoned")
            .lifecycle
    }

    /// Returns a copy of the active configuration.
    pub fn config(&self) -> RouterConfig {
        self.inner
            .state
            .read()
            .expect("router lock poisoned")
            .config
            .clone()
    }

    /// Returns the number of registered routes.
    pub fn route_count(&self) -> usize {
        self.inner
            .state
            .read()
            .expect("router lock poisoned")
            .routes
            .len()
    }

    /// Initializes the router.
    ///
    /// Applies `config` (defaults when `None`), subscribes to navigation
    /// notifications so external traversal triggers a dispatch, and
    /// transitions to [`LifecycleState::Active`]. A no-op while already
    /// active: repeated init performs no second subscription and does not
    /// touch the configuration.
    ///
    /// The subscription holds only a weak reference to the router, so an
    /// initialized router that is dropped without [`destroy`](Self::destroy)
    /// is not kept alive by its own handler.
    pub fn init(&self, config: Option<RouterConfig>) -> &Self {
        {
            let mut state = self.inner.state.write().expect("router lock poisoned");
            if state.lifecycle == LifecycleState::Active {
                return self;
            }
            state.config = config.unwrap_or_default();
            state.lifecycle = LifecycleState::Active;
        }

        let weak = Arc::downgrade(&self.inner);
        self.inner.history.subscribe(
            &self.inner.subscription_id,
            Arc::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let router = Self { inner };
                    // The notifier offers no error channel; a decode
                    // failure on the current location ends here.
                    if let Err(e) = router.dispatch(None) {
                        warn!("navigation dispatch failed: {e}");
                    }
                }
            }),
        );

        debug!(config = ?self.config(), "router initialized");
        self
    }

    /// Appends a route. Never fails; duplicate patterns coexist and only
    /// the first is reachable.
    pub fn add(&self, matcher: impl PathMatcher + 'static, callback: RouteCallback) -> &Self {
        self.add_route(Arc::new(matcher), callback)
    }

    /// Appends a route from an already-shared matcher.
    pub fn add_route(&self, matcher: Arc<dyn PathMatcher>, callback: RouteCallback) -> &Self {
        trace!(pattern = matcher.as_str(), "route added");
        self.inner
            .state
            .write()
            .expect("router lock poisoned")
            .routes
            .add(matcher, callback);
        self
    }

    /// Compiles `pattern` as a regular expression and appends a route.
    ///
    /// # Errors
    ///
    /// Returns [`StradaError::InvalidPattern`](strada_core::StradaError::InvalidPattern)
    /// if the pattern fails to compile.
    pub fn add_pattern(&self, pattern: &str, callback: RouteCallback) -> StradaResult<&Self> {
        let matcher = RegexMatcher::new(pattern)?;
        Ok(self.add(matcher, callback))
    }

    /// Removes the first route whose matcher's canonical form equals
    /// `pattern`. A no-op when absent.
    pub fn remove(&self, pattern: &str) -> &Self {
        let removed = self
            .inner
            .state
            .write()
            .expect("router lock poisoned")
            .routes
            .remove(pattern);
        if removed {
            trace!(pattern, "route removed");
        }
        self
    }

    /// Removes all routes.
    pub fn clear(&self) -> &Self {
        self.inner
            .state
            .write()
            .expect("router lock poisoned")
            .routes
            .clear();
        self
    }

    /// Dispatches a path against the route table.
    ///
    /// With `None`, the path is read from the session history and
    /// canonicalized against the active configuration; an explicit path is
    /// used verbatim. Routes are scanned in insertion order and the first
    /// matcher success wins: its callback receives
    /// `(path, captures, matcher)` and the scan stops. No match is a
    /// silent no-op.
    ///
    /// The table is snapshotted before iteration and no lock is held while
    /// a callback runs, so callbacks may freely call `add`, `remove`,
    /// `clear`, or `navigate`; table mutations take effect for subsequent
    /// dispatches only.
    ///
    /// # Errors
    ///
    /// Propagates the decoding failure when the current location's
    /// percent-decoded path is not valid UTF-8.
    pub fn dispatch(&self, path: Option<&str>) -> StradaResult<&Self> {
        let (config, snapshot) = {
            let state = self.inner.state.read().expect("router lock poisoned");
            (state.config.clone(), state.routes.snapshot())
        };

        let path = match path {
            Some(p) => p.to_string(),
            None => canonical_pathname(&self.inner.history.current_raw_path(), &config)?,
        };

        let span = strada_core::logging::dispatch_span(&path);
        let _guard = span.enter();

        for route in &snapshot {
            if let Some(captures) = route.matcher().captures(&path) {
                trace!(pattern = route.matcher().as_str(), "route matched");
                (route.callback())(&path, &captures, route.matcher().as_ref());
                return Ok(self);
            }
        }

        debug!("no route matched");
        Ok(self)
    }

    /// Pushes a normalized target onto the session history, then
    /// dispatches against the new location.
    ///
    /// The target is the configured root plus the slash-cleared path, with
    /// a trailing `/` appended only when the trailing-slash policy is on
    /// **and** the cleared path is non-empty; navigating to the root
    /// itself never gets a forced trailing slash beyond the root.
    ///
    /// # Errors
    ///
    /// Propagates the decoding failure from the follow-up dispatch.
    pub fn navigate(&self, path: &str) -> StradaResult<&Self> {
        let config = self.config();
        let cleared = clear_slashes(path);

        let target = if config.trailing_slash && !cleared.is_empty() {
            format!("{}{cleared}/", config.root)
        } else {
            format!("{}{cleared}", config.root)
        };

        debug!("navigating to {target}");
        self.inner.history.push_path(&target);
        self.dispatch(None)
    }

    /// Destroys the router.
    ///
    /// Unsubscribes from navigation notifications, clears the route table,
    /// resets the configuration to defaults, and transitions back to
    /// [`LifecycleState::Uninitialized`]. A no-op while uninitialized.
    pub fn destroy(&self) -> &Self {
        {
            let mut state = self.inner.state.write().expect("router lock poisoned");
            if state.lifecycle == LifecycleState::Uninitialized {
                return self;
            }
            state.routes.clear();
            state.config = RouterConfig::default();
            state.lifecycle = LifecycleState::Uninitialized;
        }

        self.inner.history.unsubscribe(&self.inner.subscription_id);
        debug!("router destroyed");
        self
    }

    /// Parses a query string into a [`QueryParams`].
    ///
    /// With `None`, the current location's query string is used.
    ///
    /// # Errors
    ///
    /// Propagates the decoding failure when a percent-decoded value is not
    /// valid UTF-8.
    pub fn parse_query(&self, query: Option<&str>) -> StradaResult<QueryParams> {
        match query {
            Some(q) => QueryParams::parse(q),
            None => QueryParams::parse(&self.inner.history.current_raw_query()),
        }
    }

    /// Returns all values for `key` in the given query string (or the
    /// current location's query when `None`), or `None` if the key is
    /// absent.
    ///
    /// # Errors
    ///
    /// Propagates the decoding failure from [`parse_query`](Self::parse_query).
    pub fn query_value(
        &self,
        key: &str,
        query: Option<&str>,
    ) -> StradaResult<Option<Vec<Option<String>>>> {
        Ok(self.parse_query(query)?.get_list(key).cloned())
    }

    /// Encodes a parameter map as a query string.
    pub fn build_query(&self, params: &QueryParams) -> String {
        params.urlencode()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use strada_history::{HistoryWriter, LocationReader, MemoryHistory};

    use super::*;

    fn new_router() -> Router<MemoryHistory> {
        Router::new(Arc::new(MemoryHistory::new()))
    }

    fn matcher(pattern: &str) -> RegexMatcher {
        RegexMatcher::new(pattern).unwrap()
    }

    #[test]
    fn test_starts_uninitialized() {
        let router = new_router();
        assert_eq!(router.lifecycle(), LifecycleState::Uninitialized);
    }

    #[test]
    fn test_init_applies_config() {
        let router = new_router();
        router.init(Some(RouterConfig {
            root: "/app/".to_string(),
            trailing_slash: false,
        }));

        assert_eq!(router.lifecycle(), LifecycleState::Active);
        assert_eq!(router.config().root, "/app/");
        assert!(!router.config().trailing_slash);
    }

    #[test]
    fn test_init_twice_keeps_first_config() {
        let router = new_router();
        router.init(Some(RouterConfig::with_root("/app/")));
        router.init(Some(RouterConfig::with_root("/other/")));
        assert_eq!(router.config().root, "/app/");
    }

    #[test]
    fn test_dispatch_explicit_path_first_match_wins() {
        let router = new_router();
        let hits = Arc::new(Mutex::new(Vec::new()));

        let log = hits.clone();
        router.add(
            matcher(r"^user/(\d+)$"),
            Arc::new(move |_path, captures, _pattern| {
                log.lock().unwrap().push(("numeric", captures.to_vec()));
            }),
        );
        let log = hits.clone();
        router.add(
            matcher("^user/new$"),
            Arc::new(move |_path, captures, _pattern| {
                log.lock().unwrap().push(("new", captures.to_vec()));
            }),
        );

        router.dispatch(Some("user/42")).unwrap();
        router.dispatch(Some("user/new")).unwrap();

        let hits = hits.lock().unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0], ("numeric", vec![Some("42".to_string())]));
        assert_eq!(hits[1], ("new", vec![]));
    }

    #[test]
    fn test_dispatch_no_match_is_silent() {
        let router = new_router();
        router.add(matcher("^a$"), Arc::new(|_, _, _| {}));
        router.dispatch(Some("b")).unwrap();
    }

    #[test]
    fn test_dispatch_stops_at_first_match() {
        let router = new_router();
        let count = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let c = count.clone();
            router.add(
                matcher("^same$"),
                Arc::new(move |_, _, _| {
                    c.fetch_add(1, Ordering::SeqCst);
                }),
            );
        }

        router.dispatch(Some("same")).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_callback_receives_path_and_pattern() {
        let router = new_router();
        let seen = Arc::new(Mutex::new(None));

        let slot = seen.clone();
        router.add(
            matcher(r"^user/(\d+)$"),
            Arc::new(move |path, _captures, pattern| {
                *slot.lock().unwrap() = Some((path.to_string(), pattern.as_str().to_string()));
            }),
        );

        router.dispatch(Some("user/7")).unwrap();
        assert_eq!(
            seen.lock().unwrap().clone(),
            Some(("user/7".to_string(), r"^user/(\d+)$".to_string())),
        );
    }

    #[test]
    fn test_remove_exposes_second_duplicate() {
        let router = new_router();
        let hits = Arc::new(Mutex::new(Vec::new()));

        for name in ["first", "second"] {
            let log = hits.clone();
            router.add(
                matcher("^dup$"),
                Arc::new(move |_, _, _| {
                    log.lock().unwrap().push(name);
                }),
            );
        }

        router.remove("^dup$");
        router.dispatch(Some("dup")).unwrap();

        assert_eq!(*hits.lock().unwrap(), vec!["second"]);
    }

    #[test]
    fn test_add_pattern_invalid() {
        let router = new_router();
        assert!(router.add_pattern("(unclosed", Arc::new(|_, _, _| {})).is_err());
    }

    #[test]
    fn test_reentrant_add_during_dispatch_uses_snapshot() {
        let router = new_router();
        let count = Arc::new(AtomicUsize::new(0));

        let reentrant = router.clone();
        let c = count.clone();
        router.add(
            matcher("^x$"),
            Arc::new(move |_, _, _| {
                c.fetch_add(1, Ordering::SeqCst);
                let c2 = c.clone();
                // Also matches "x", but must not run during this dispatch.
                reentrant.add(
                    matcher("^x$"),
                    Arc::new(move |_, _, _| {
                        c2.fetch_add(100, Ordering::SeqCst);
                    }),
                );
            }),
        );

        router.dispatch(Some("x")).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(router.route_count(), 2);
    }

    #[test]
    fn test_reentrant_clear_during_dispatch() {
        let router = new_router();
        let count = Arc::new(AtomicUsize::new(0));

        let reentrant = router.clone();
        let c = count.clone();
        router.add(
            matcher("^x$"),
            Arc::new(move |_, _, _| {
                c.fetch_add(1, Ordering::SeqCst);
                reentrant.clear();
            }),
        );

        router.dispatch(Some("x")).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(router.route_count(), 0);
    }

    #[test]
    fn test_navigate_builds_target_and_dispatches() {
        let router = new_router();
        router.init(Some(RouterConfig::with_root("/app/")));

        let seen = Arc::new(Mutex::new(None));
        let slot = seen.clone();
        router.add(
            matcher("^profile$"),
            Arc::new(move |path, _, _| {
                *slot.lock().unwrap() = Some(path.to_string());
            }),
        );

        router.navigate("profile").unwrap();

        assert_eq!(router.history().current_raw_path(), "/app/profile/");
        assert_eq!(seen.lock().unwrap().clone(), Some("profile".to_string()));
    }

    #[test]
    fn test_navigate_root_gets_no_forced_trailing_slash() {
        let router = new_router();
        router.init(None);
        router.navigate("").unwrap();
        assert_eq!(router.history().current_raw_path(), "/");
    }

    #[test]
    fn test_navigate_without_trailing_slash_policy() {
        let router = new_router();
        router.init(Some(RouterConfig {
            root: "/".to_string(),
            trailing_slash: false,
        }));
        router.navigate("profile").unwrap();
        assert_eq!(router.history().current_raw_path(), "/profile");
    }

    #[test]
    fn test_destroy_resets_everything() {
        let router = new_router();
        router.init(Some(RouterConfig::with_root("/app/")));
        router.add(matcher("^a$"), Arc::new(|_, _, _| {}));

        router.destroy();

        assert_eq!(router.lifecycle(), LifecycleState::Uninitialized);
        assert_eq!(router.route_count(), 0);
        assert_eq!(router.config(), RouterConfig::default());
    }

    #[test]
    fn test_destroy_twice_is_noop() {
        let router = new_router();
        router.init(None);
        router.destroy().destroy();
        assert_eq!(router.lifecycle(), LifecycleState::Uninitialized);
    }

    #[test]
    fn test_query_surface() {
        let router = new_router();
        let params = router.parse_query(Some("a=1&a=2&b=")).unwrap();
        assert_eq!(
            router.query_value("a", Some("a=1&a=2&b=")).unwrap(),
            Some(vec![Some("1".to_string()), Some("2".to_string())]),
        );
        assert_eq!(router.build_query(&params), "a=1&a=2");
    }

    #[test]
    fn test_parse_query_defaults_to_current_location() {
        let router = new_router();
        router.history().push_path("/search/?q=rust");
        let params = router.parse_query(None).unwrap();
        assert_eq!(params.get("q"), Some(Some("rust")));
    }

    #[test]
    fn test_chaining() {
        let router = new_router();
        router
            .init(None)
            .add(matcher("^a$"), Arc::new(|_, _, _| {}))
            .remove("^a$")
            .clear()
            .destroy();
    }
}
