//! `tracing` subscriber setup.
//!
//! Diagnostics go to stderr so they never interleave with game text on
//! stdout.

use adventure_foundation::{Error, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when neither an explicit directive nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter: explicit directive first, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`].
///
/// # Errors
///
/// Returns an error if the explicit directive does not parse.
pub fn env_filter(explicit: Option<&str>) -> Result<EnvFilter> {
    match explicit {
        Some(directive) => EnvFilter::try_new(directive)
            .map_err(|e| Error::invalid_argument(format!("log filter '{directive}': {e}"))),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already
/// installed.
pub fn init_logging(explicit: Option<&str>) -> Result<()> {
    let filter = env_filter(explicit)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| Error::internal(format!("logging already initialized: {e}")))
}
