//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "SIGNAL_LOG";

const DEFAULT_FILTER: &str = "signal_core=info,signal_timing=info,signal_api=info,tower_http=info";

/// Initialize the tracing/logging system.
///
/// Reads `SIGNAL_LOG` for per-target log levels, e.g.
/// `SIGNAL_LOG=signal_timing=debug,signal_api=info`.
/// Falls back to info-level for the workspace crates if unset or invalid.
///
/// Idempotent: later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // try_init: another subscriber may already be set by an embedding host.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
