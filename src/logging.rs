//! Structured logging initialization.
//!
//! Consumers of the registry (the manager CLI, the plugin host) call in
//! here once at startup, either with an explicit verbosity or with the
//! level persisted in the store.

use std::io::{self, IsTerminal};

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::store::Preferences;

/// Map a stored integer log level onto a filter directive.
///
/// 0 = off, 1 = error, 2 = warn, 3 = info, 4 = debug, 5+ = trace.
#[must_use]
pub fn directive_for_level(level: i64) -> &'static str {
    match level {
        i64::MIN..=0 => "vcamreg=off",
        1 => "vcamreg=error",
        2 => "vcamreg=warn",
        3 => "vcamreg=info",
        4 => "vcamreg=debug",
        _ => "vcamreg=trace",
    }
}

/// Initialize the tracing subscriber with an explicit integer level.
///
/// # Environment Variables
///
/// * `RUST_LOG` - Overrides the level (e.g., "vcamreg=debug")
pub fn init_with_level(level: i64) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive_for_level(level)));

    if io::stderr().is_terminal() {
        // Pretty output for interactive terminals
        let fmt_layer = fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_thread_ids(false)
            .with_span_events(FmtSpan::NONE)
            .with_writer(io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    } else {
        // Compact output for non-TTY (piped, redirected)
        let fmt_layer = fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_thread_ids(false)
            .with_span_events(FmtSpan::NONE)
            .compact()
            .with_writer(io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Initialize logging from the level persisted in the store.
pub fn init_from_store(prefs: &Preferences) {
    init_with_level(prefs.log_level());
}
