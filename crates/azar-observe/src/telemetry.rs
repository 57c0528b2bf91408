//! Subscriber installation for demos and harnesses.
//!
//! Libraries only emit `tracing` events; installing a subscriber is the
//! binary's decision. These helpers wire up the conventional env-filter
//! formatter without panicking when a subscriber already exists.

use tracing_subscriber::EnvFilter;

use crate::error::{ObserveError, Result};

/// Installs the global env-filter formatter subscriber.
///
/// Filtering follows `RUST_LOG`; an empty environment logs nothing below
/// the error level.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init() -> Result<()> {
    init_with_filter(EnvFilter::from_default_env())
}

/// Installs the global formatter subscriber with an explicit filter.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_with_filter(filter: impl Into<EnvFilter>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| ObserveError::telemetry(err.to_string()))
}
