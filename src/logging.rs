//! Log subscriber setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the application. `RUST_LOG` wins over the verbosity flag.

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{ChatlensError, Result};

/// Installs a stderr `fmt` layer filtered by `RUST_LOG`, falling back to
/// `debug` when `verbose` is set and `warn` otherwise.
pub fn init_logging(verbose: bool) -> Result<()> {
    let fallback = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .map_err(|e| ChatlensError::invalid_config(format!("log filter: {e}")))?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .map_err(|e| ChatlensError::invalid_config(format!("log subscriber: {e}")))
}
