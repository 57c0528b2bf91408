//! Observability error types.

/// Result type alias for observe operations.
pub type Result<T> = std::result::Result<T, ObserveError>;

/// Observability errors.
#[derive(Debug, thiserror::Error)]
pub enum ObserveError {
    /// Telemetry installation error.
    #[error("telemetry error: {0}")]
    Telemetry(String),

    /// One or more cases in a batch failed.
    #[error("{failed} of {total} cases failed in `{set}`: {names:?}")]
    Cases {
        /// The case set name.
        set: String,
        /// Number of failed cases.
        failed: usize,
        /// Total cases run.
        total: usize,
        /// Names of the failed cases.
        names: Vec<String>,
    },
}

impl ObserveError {
    /// Creates a telemetry error.
    #[must_use]
    pub fn telemetry(msg: impl Into<String>) -> Self {
        Self::Telemetry(msg.into())
    }
}
