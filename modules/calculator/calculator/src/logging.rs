//! Logging setup for the `calculator-demo` binary.
//!
//! Events go to stderr so the demo output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a default filter directive.
#[must_use]
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity-derived level.
///
/// # Errors
/// Returns an error if a global subscriber has already been installed.
pub fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
