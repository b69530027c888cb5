//! Log output for the binary.
//!
//! Library crates only emit `tracing` events; installing a subscriber is left
//! to the binary. The filter is read from `RASALINT_LOG` using the usual
//! `EnvFilter` directive syntax (`debug`, `rasalint_engine=trace`, ...).

use rasalint_foundation::{Error, ErrorKind, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "RASALINT_LOG";

/// Filter used when `RASALINT_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from an optional directive string, falling back to
/// [`DEFAULT_FILTER`].
#[must_use]
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a formatted subscriber on stderr, filtered by `RASALINT_LOG`.
///
/// `verbose` raises the default to `debug` when the variable is unset.
///
/// # Errors
///
/// Returns an `Internal` error if a global subscriber is already installed.
pub fn init(verbose: bool) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let filter = match (env.as_deref(), verbose) {
        (None, true) => EnvFilter::new("debug"),
        (directives, _) => filter_from(directives),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))
}
