//! Logging configuration for sqlsplit.
//!
//! Statements go to stdout, so logs are always written to stderr.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset. Kept quiet so piped output
/// stays clean.
pub const DEFAULT_FILTER: &str = "warn";

/// Initializes logging to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` raises the level to
/// `debug`.
pub fn init_stderr_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the env filter used by [`init_stderr_logging`].
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(verbose)))
}

fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        DEFAULT_FILTER
    }
}
