//! # strada-core
//!
//! Core types, settings, and error types for the strada router.
//! This crate has no routing logic of its own and provides the foundation
//! for the other crates in the workspace.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Router and library settings with documented defaults
//! - [`settings_loader`] - Settings loading from TOML files and environment variables
//! - [`logging`] - Tracing-based logging integration
//! - [`utils`] - Utility types (`MultiValueDict`)

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{StradaError, StradaResult};
pub use settings::{RouterConfig, Settings};
