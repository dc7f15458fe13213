//! Tracing initialization.

use std::sync::Once;

use netsel_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install a fmt subscriber filtered by `NETSEL_LOG`.
///
/// Format: `NETSEL_LOG=netsel_registry=debug,netsel_nomination=info`.
/// Falls back to the configured log level if `NETSEL_LOG` is unset or invalid.
/// Idempotent; also a no-op if another global subscriber is already set.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("NETSEL_LOG")
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
