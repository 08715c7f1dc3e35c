//! Logging integration for the strada router.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-dispatch spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The log level is read from `settings.log_level` (e.g. "debug", "info",
/// "warn", "error"). In debug mode a pretty, human-readable format is used;
/// in production a structured JSON format is used.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one dispatch.
///
/// Attach this span around route matching so that all log entries emitted
/// while a callback runs include the dispatched path.
///
/// # Examples
///
/// ```
/// use strada_core::logging::dispatch_span;
///
/// let span = dispatch_span("user/42");
/// let _guard = span.enter();
/// tracing::info!("matching routes");
/// ```
pub fn dispatch_span(path: &str) -> tracing::Span {
    tracing::info_span!("dispatch", path = path)
}
