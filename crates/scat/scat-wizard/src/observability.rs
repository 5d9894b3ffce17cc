//! Tracing initialisation.

use std::sync::Once;

use scat_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// `SCAT_LOG` takes precedence over `config.log_level` as the filter
/// directive, e.g. `SCAT_LOG=scat_wizard=debug,scat_storage=warn`. Falls back
/// to `info` when neither parses. Idempotent; also a no-op when the host has
/// already installed a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SCAT_LOG")
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if config.json_logs {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        if result.is_err() {
            tracing::debug!("global tracing subscriber already set");
        }
    });
}
