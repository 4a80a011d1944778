//! Tracing initialization.
//!
//! Uses `config::ObservabilityConfig` for PYLAUNCH_QUIET, PYLAUNCH_LOG_LEVEL and
//! PYLAUNCH_LOG_JSON. Output always goes to stderr so it never interleaves with
//! the child's stdout.

use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

/// Filter directive used when `verbose` is requested.
pub const VERBOSE_LEVEL: &str = "pylaunch=debug";

/// Pick the filter directive: quiet wins over verbose, verbose over the configured level.
pub fn effective_level(cfg: &ObservabilityConfig, verbose: bool) -> String {
    if cfg.quiet {
        "pylaunch=error".to_string()
    } else if verbose {
        VERBOSE_LEVEL.to_string()
    } else {
        cfg.log_level.clone()
    }
}

/// Initialize tracing. Call once at process startup; later calls are no-ops.
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_tracing(cfg: &ObservabilityConfig, verbose: bool) {
    let level = effective_level(cfg, verbose);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}
