//! Settings for the strada router.
//!
//! This module provides [`RouterConfig`], the per-router options applied at
//! init time, and [`Settings`], the ambient library configuration. Both
//! carry documented defaults; invalid value types are compile-time errors
//! rather than silently-ignored runtime checks.

use serde::{Deserialize, Serialize};

/// Per-router configuration.
///
/// The values are applied by `Router::init` and stay fixed for the
/// router's active lifetime; `Router::destroy` resets them to defaults.
///
/// # Examples
///
/// ```
/// use strada_core::RouterConfig;
///
/// let config = RouterConfig::default();
/// assert_eq!(config.root, "/");
/// assert!(config.trailing_slash);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// The prefix under which the router operates. Defaults to `"/"`.
    pub root: String,
    /// Whether navigation targets get a trailing slash appended.
    /// Defaults to `true`.
    pub trailing_slash: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            root: "/".to_string(),
            trailing_slash: true,
        }
    }
}

impl RouterConfig {
    /// Creates a configuration with the given root and the default
    /// trailing-slash policy.
    pub fn with_root(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

/// The complete set of library settings.
///
/// # Examples
///
/// ```
/// use strada_core::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.log_level, "info");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Whether debug mode is enabled. Controls the log output format.
    pub debug: bool,
    /// The log level filter (e.g. `"debug"`, `"info"`, `"warn"`).
    pub log_level: String,
    /// The router configuration applied when a router is initialized
    /// from these settings.
    pub router: RouterConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            router: RouterConfig::default(),
        }
    }
}
