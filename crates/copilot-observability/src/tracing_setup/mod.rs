//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use copilot_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable read for per-target log filtering.
pub const LOG_ENV_VAR: &str = "COPILOT_LOG";

/// Initialize the tracing subscriber with human-readable output.
///
/// Respects the `COPILOT_LOG` environment variable for filtering
/// (e.g. `COPILOT_LOG=copilot_embeddings=debug,info`).
/// Defaults to `info` level if not set.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    install("info", false);
}

/// Initialize tracing from config. `COPILOT_LOG` still wins over `log_level`.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    install(&config.log_level, config.json_logs);
}

fn install(default_level: &str, json: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        // A host application may already own the global subscriber.
        let _ = if json {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        };
    });
}
