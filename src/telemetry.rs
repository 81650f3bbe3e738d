//! Tracing initialization for diagnostic logs.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "AWS_CONFIGURE_LOG";

/// Initialize `tracing`, writing to stderr so stdout stays clean for data.
///
/// The filter comes from `AWS_CONFIGURE_LOG`; without it only warnings are
/// shown, or debug events when `verbose` is set.
pub fn init_tracing(verbose: bool) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}
