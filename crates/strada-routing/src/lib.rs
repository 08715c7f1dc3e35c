//! # strada-routing
//!
//! Matching and dispatch engine for the strada router: path patterns with
//! capture groups, an insertion-ordered route table with first-match
//! dispatch, path canonicalization, query-string handling, and the
//! [`Router`] lifecycle controller that ties them to a session history.
//!
//! ## Modules
//!
//! - [`matcher`]: the [`PathMatcher`] trait and the regex-backed default
//! - [`path`]: slash and root-prefix canonicalization
//! - [`query`]: multi-valued query-string parsing and building
//! - [`route`]: routes and the route table
//! - [`router`]: lifecycle control and dispatch
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use strada_history::MemoryHistory;
//! use strada_routing::{RegexMatcher, Router};
//!
//! let router = Router::new(Arc::new(MemoryHistory::new()));
//! router.init(None);
//!
//! router.add(
//!     RegexMatcher::new(r"^user/(\d+)$").unwrap(),
//!     Arc::new(|path, captures, _pattern| {
//!         println!("{path}: user {:?}", captures[0]);
//!     }),
//! );
//!
//! router.navigate("user/42").unwrap();
//! router.destroy();
//! ```

pub mod matcher;
pub mod path;
pub mod query;
pub mod route;
pub mod router;

pub use matcher::{PathMatcher, RegexMatcher};
pub use query::QueryParams;
pub use route::{Route, RouteCallback, RouteTable};
pub use router::{LifecycleState, Router};
