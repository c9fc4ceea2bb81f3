//! Logging init: progress and errors go to stderr, filtered by `RUST_LOG`.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Initialize logging to stderr. Fails if a global subscriber is already set.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}
