//! In-memory session history.
//!
//! [`MemoryHistory`] stores the active location as a [`Url`] together with
//! past/future stacks, mirroring the behavior of a browser session history:
//! pushing a new location truncates the forward stack and does not notify,
//! while back/forward traversal does notify subscribers.

use std::sync::RwLock;

use tracing::error;
use url::Url;

use crate::listeners::NavigationListeners;
use crate::{HistoryWriter, LocationReader, NavigationHandler, NavigationNotifier};

/// Synthetic base for locations held in memory; only the path and query
/// portions are ever exposed.
const BASE_URL: &str = "memory://app/";

struct MemoryState {
    current: Url,
    past: Vec<Url>,
    future: Vec<Url>,
}

/// A session history that stores all state in memory.
///
/// # Examples
///
/// ```
/// use strada_history::{HistoryWriter, LocationReader, MemoryHistory};
///
/// let history = MemoryHistory::new();
/// history.push_path("/articles/?page=2");
///
/// assert_eq!(history.current_raw_path(), "/articles/");
/// assert_eq!(history.current_raw_query(), "page=2");
///
/// history.back();
/// assert_eq!(history.current_raw_path(), "/");
/// ```
pub struct MemoryHistory {
    state: RwLock<MemoryState>,
    listeners: NavigationListeners,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHistory {
    /// Creates a history positioned at the root path `/`.
    pub fn new() -> Self {
        let base = Url::parse(BASE_URL).expect("base url is valid");
        Self {
            state: RwLock::new(MemoryState {
                current: base,
                past: Vec::new(),
                future: Vec::new(),
            }),
            listeners: NavigationListeners::new(),
        }
    }

    /// Creates a history positioned at the given initial path.
    ///
    /// Falls back to the root path if `path` cannot be resolved.
    pub fn with_initial(path: &str) -> Self {
        let history = Self::new();
        {
            let mut state = history.state.write().expect("history lock poisoned");
            if let Ok(url) = state.current.join(path) {
                state.current = url;
            }
        }
        history
    }

    /// Returns `true` if there is an entry to go back to.
    pub fn can_go_back(&self) -> bool {
        !self.state.read().expect("history lock poisoned").past.is_empty()
    }

    /// Returns `true` if there is an entry to go forward to.
    pub fn can_go_forward(&self) -> bool {
        !self.state.read().expect("history lock poisoned").future.is_empty()
    }

    /// Moves one entry back in the history and notifies subscribers.
    ///
    /// Does nothing when there is no past entry.
    pub fn back(&self) {
        let moved = {
            let mut state = self.state.write().expect("history lock poisoned");
            match state.past.pop() {
                Some(previous) => {
                    let current = std::mem::replace(&mut state.current, previous);
                    state.future.push(current);
                    true
                }
                None => false,
            }
        };

        if moved {
            self.listeners.notify();
        }
    }

    /// Moves one entry forward in the history and notifies subscribers.
    ///
    /// Does nothing when there is no future entry.
    pub fn forward(&self) {
        let moved = {
            let mut state = self.state.write().expect("history lock poisoned");
            match state.future.pop() {
                Some(next) => {
                    let current = std::mem::replace(&mut state.current, next);
                    state.past.push(current);
                    true
                }
                None => false,
            }
        };

        if moved {
            self.listeners.notify();
        }
    }
}

impl NavigationNotifier for MemoryHistory {
    fn subscribe(&self, handler_id: &str, handler: NavigationHandler) {
        self.listeners.connect(handler_id, handler);
    }

    fn unsubscribe(&self, handler_id: &str) -> bool {
        self.listeners.disconnect(handler_id)
    }
}

impl HistoryWriter for MemoryHistory {
    fn push_path(&self, path: &str) {
        if path.starts_with("//") {
            error!(r#"cannot navigate to paths starting with "//", path: {path}"#);
            return;
        }

        let mut state = self.state.write().expect("history lock poisoned");
        match state.current.join(path) {
            Ok(url) => {
                let previous = std::mem::replace(&mut state.current, url);
                state.past.push(previous);
                state.future.clear();
            }
            Err(e) => error!("cannot navigate to {path}: {e}"),
        }
    }
}

impl LocationReader for MemoryHistory {
    fn current_raw_path(&self) -> String {
        self.state
            .read()
            .expect("history lock poisoned")
            .current
            .path()
            .to_string()
    }

    fn current_raw_query(&self) -> String {
        self.state
            .read()
            .expect("history lock poisoned")
            .current
            .query()
            .unwrap_or("")
            .to_string()
    }
}
