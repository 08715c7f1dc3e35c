//! # strada
//!
//! A small history-based client-side router for Rust.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access. You can depend on `strada` to get the whole library, or depend
//! on individual crates for finer-grained control.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use strada::history::MemoryHistory;
//! use strada::routing::{RegexMatcher, Router};
//!
//! let router = Router::new(Arc::new(MemoryHistory::new()));
//! router.init(None);
//!
//! router.add(
//!     RegexMatcher::new(r"^articles/(\d{4})$").unwrap(),
//!     Arc::new(|_path, captures, _pattern| {
//!         println!("articles from {:?}", captures[0]);
//!     }),
//! );
//!
//! router.navigate("articles/2024").unwrap();
//! router.destroy();
//! ```

/// Core types, settings, and error types.
pub use strada_core as core;

/// Session-history abstraction and the in-memory implementation.
pub use strada_history as history;

/// Matching and dispatch engine: patterns, routes, the router.
pub use strada_routing as routing;

// The types almost every user touches, re-exported at the root.
pub use strada_core::{RouterConfig, Settings, StradaError, StradaResult};
pub use strada_history::MemoryHistory;
pub use strada_routing::{QueryParams, RegexMatcher, Router};

// Third-party re-export so applications can log with the same subscriber.
pub use tracing;
