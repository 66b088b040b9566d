//! Logging setup for the binaries.
//!
//! Logs go to stderr. The level defaults to INFO (DEBUG with `verbose`) and
//! can be overridden with the `RUST_LOG` environment variable.

use tracing_subscriber::{EnvFilter, fmt};

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    let result = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(true)
        .try_init();

    // A global subscriber may already be installed.
    if let Err(e) = result {
        tracing::debug!("logging already initialised: {e}");
    }

    tracing::info!("colour_square v{} started", env!("CARGO_PKG_VERSION"));
}
