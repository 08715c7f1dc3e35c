//! # strada-history
//!
//! Session-history abstraction for the strada router. The router core only
//! needs three narrow capabilities from its host environment: being told
//! when the active location changes ([`NavigationNotifier`]), recording a
//! new location without a reload ([`HistoryWriter`]), and reading the
//! current location ([`LocationReader`]). This crate defines those traits
//! and provides [`MemoryHistory`], an in-process implementation backed by
//! past/future stacks, so the router can be driven and tested without a
//! browser.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! use strada_history::{HistoryWriter, MemoryHistory, NavigationNotifier};
//!
//! let history = MemoryHistory::new();
//! let fired = Arc::new(AtomicUsize::new(0));
//!
//! let counter = fired.clone();
//! history.subscribe("observer", Arc::new(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! }));
//!
//! history.push_path("/articles/");
//! assert_eq!(fired.load(Ordering::SeqCst), 0); // pushes do not notify
//!
//! history.back();
//! assert_eq!(fired.load(Ordering::SeqCst), 1); // traversal does
//! ```

mod listeners;
mod memory;

pub use listeners::NavigationListeners;
pub use memory::MemoryHistory;

use std::sync::Arc;

/// A handler invoked when the active location changes without a push.
///
/// Handlers must be `Send + Sync` so a history can be shared across threads.
pub type NavigationHandler = Arc<dyn Fn() + Send + Sync>;

/// Notifies subscribers whenever the active location changes outside the
/// router's control (e.g. back/forward traversal).
pub trait NavigationNotifier {
    /// Registers `handler` under `handler_id`.
    ///
    /// Subscribing an id that is already registered replaces its handler.
    fn subscribe(&self, handler_id: &str, handler: NavigationHandler);

    /// Removes the handler registered under `handler_id`.
    ///
    /// Returns `true` if a handler was found and removed.
    fn unsubscribe(&self, handler_id: &str) -> bool;
}

/// Records a new path as the active location without a reload.
pub trait HistoryWriter {
    /// Pushes `path` onto the session history. Does not notify subscribers.
    fn push_path(&self, path: &str);
}

/// Reads the active location.
pub trait LocationReader {
    /// The undecoded path portion of the active location.
    fn current_raw_path(&self) -> String;

    /// The undecoded query portion of the active location, without the
    /// leading `?`. Empty when there is no query.
    fn current_raw_query(&self) -> String;
}

/// The full set of history capabilities the router needs from its host.
pub trait SessionHistory: NavigationNotifier + HistoryWriter + LocationReader {}

impl<T: NavigationNotifier + HistoryWriter + LocationReader> SessionHistory for T {}
