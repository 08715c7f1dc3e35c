//! Settings loading from configuration files.
//!
//! This module provides functions to load [`Settings`] from TOML files and
//! to apply environment variable overrides.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `STRADA_DEBUG` | `debug` |
//! | `STRADA_LOG_LEVEL` | `log_level` |
//! | `STRADA_ROOT` | `router.root` |
//! | `STRADA_TRAILING_SLASH` | `router.trailing_slash` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use strada_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file("config/strada.toml").unwrap();
//! let settings = settings_loader::from_toml_file_with_env("config/strada.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::StradaError;
use crate::settings::Settings;

/// Loads settings from a TOML string.
///
/// The TOML is deserialized on top of the default settings, so any fields
/// not present in the TOML keep their default values.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or cannot be deserialized.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, StradaError> {
    // Two-step approach: deserialize the TOML into a serde_json::Value,
    // then merge it with the default settings. This keeps defaults for
    // any settings not specified in the TOML.
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| StradaError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;

    let json_value = toml_to_json(toml_value);
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        StradaError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, json_value);
    serde_json::from_value(merged).map_err(|e| {
        StradaError::ConfigurationError(format!("Failed to deserialize settings from TOML: {e}"))
    })
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, StradaError> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        StradaError::ConfigurationError(format!(
            "Failed to read TOML file '{}': {e}",
            path.as_ref().display()
        ))
    })?;
    from_toml_str(&content)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, StradaError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies environment variable overrides to a settings struct.
///
/// Supported environment variables:
///
/// - `STRADA_DEBUG` -> `debug` (values: "true"/"1"/"yes" => true, anything else => false)
/// - `STRADA_LOG_LEVEL` -> `log_level`
/// - `STRADA_ROOT` -> `router.root`
/// - `STRADA_TRAILING_SLASH` -> `router.trailing_slash`
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(val) = std::env::var("STRADA_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Ok(val) = std::env::var("STRADA_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Ok(val) = std::env::var("STRADA_ROOT") {
        settings.router.root = val;
    }

    if let Ok(val) = std::env::var("STRADA_TRAILING_SLASH") {
        settings.router.trailing_slash = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }
}

// ============================================================
// Helpers
// ============================================================

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, serde_json::Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_v) => override_v,
    }
}
