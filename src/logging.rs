//! Diagnostic logging via `tracing`.
//!
//! Logs go to stderr so that a list written to stdout stays valid JSON.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the given verbosity flags.
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flags.
///
/// # Example
/// ```bash
/// RUST_LOG=pathlist=trace pathlist -i samples -o paths.json
/// ```
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
