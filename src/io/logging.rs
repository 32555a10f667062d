//! Logging initialization
//!
//! Output goes to stderr; `RUST_LOG` overrides the level picked from the flags.

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity flags
pub const fn default_level(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber
///
/// Later calls are ignored once a subscriber is installed.
pub fn init(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
