//! Navigation listener registry.
//!
//! [`NavigationListeners`] holds the handlers registered through
//! [`NavigationNotifier`](crate::NavigationNotifier) and invokes them in
//! connection order when the location changes.

use std::sync::RwLock;

use crate::NavigationHandler;

/// An ordered registry of navigation handlers, keyed by string id.
///
/// Connecting an id that is already registered replaces its handler in
/// place. Notification happens in connection order.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// use strada_history::NavigationListeners;
///
/// let listeners = NavigationListeners::new();
/// let count = Arc::new(AtomicUsize::new(0));
///
/// let c = count.clone();
/// listeners.connect("counter", Arc::new(move || {
///     c.fetch_add(1, Ordering::SeqCst);
/// }));
///
/// listeners.notify();
/// assert_eq!(count.load(Ordering::SeqCst), 1);
/// ```
#[derive(Default)]
pub struct NavigationListeners {
    receivers: RwLock<Vec<(String, NavigationHandler)>>,
}

impl NavigationListeners {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            receivers: RwLock::new(Vec::new()),
        }
    }

    /// Connects a handler under the given id, replacing any handler
    /// already registered with that id.
    pub fn connect(&self, handler_id: impl Into<String>, handler: NavigationHandler) {
        let id = handler_id.into();
        let mut receivers = self.receivers.write().expect("listener lock poisoned");

        if let Some(entry) = receivers.iter_mut().find(|(rid, _)| *rid == id) {
            entry.1 = handler;
        } else {
            receivers.push((id, handler));
        }
    }

    /// Disconnects the handler with the given id.
    ///
    /// Returns `true` if a handler was found and removed.
    pub fn disconnect(&self, handler_id: &str) -> bool {
        let mut receivers = self.receivers.write().expect("listener lock poisoned");
        let len_before = receivers.len();
        receivers.retain(|(id, _)| id != handler_id);
        receivers.len() < len_before
    }

    /// Invokes all connected handlers in connection order.
    ///
    /// The receiver list is snapshotted before any handler runs, so a
    /// handler may connect or disconnect listeners without deadlocking or
    /// invalidating the in-flight notification.
    pub fn notify(&self) {
        let snapshot: Vec<NavigationHandler> = {
            let receivers = self.receivers.read().expect("listener lock poisoned");
            receivers.iter().map(|(_, handler)| handler.clone()).collect()
        };

        for handler in snapshot {
            handler();
        }
    }

    /// Returns the number of connected handlers.
    pub fn receiver_count(&self) -> usize {
        self.receivers.read().expect("listener lock poisoned").len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_connect_and_notify() {
        let listeners = NavigationListeners::new();
        let count = Arc::new(AtomicUsize::new(0));

        let c = count.clone();
        listeners.connect("counter", Arc::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));

        listeners.notify();
        listeners.notify();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_notify_in_connection_order() {
        let listeners = NavigationListeners::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for name in ["first", "second", "third"] {
            let log = seen.clone();
            listeners.connect(name, Arc::new(move || {
                log.lock().unwrap().push(name);
            }));
        }

        listeners.notify();
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_connect_same_id_replaces() {
        let listeners = NavigationListeners::new();
        let count = Arc::new(AtomicUsize::new(0));

        let c = count.clone();
        listeners.connect("handler", Arc::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        let c = count.clone();
        listeners.connect("handler", Arc::new(move || {
            c.fetch_add(10, Ordering::SeqCst);
        }));

        assert_eq!(listeners.receiver_count(), 1);
        listeners.notify();
        assert_eq!(count.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn test_disconnect() {
        let listeners = NavigationListeners::new();
        listeners.connect("a", Arc::new(|| {}));

        assert!(listeners.disconnect("a"));
        assert!(!listeners.disconnect("a"));
        assert_eq!(listeners.receiver_count(), 0);
    }

    #[test]
    fn test_reentrant_disconnect_during_notify() {
        let listeners = Arc::new(NavigationListeners::new());
        let count = Arc::new(AtomicUsize::new(0));

        let inner = listeners.clone();
        let c = count.clone();
        listeners.connect("self-removing", Arc::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
            inner.disconnect("self-removing");
        }));

        listeners.notify();
        listeners.notify();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(listeners.receiver_count(), 0);
    }
}
