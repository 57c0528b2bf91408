//! Execution timing for individual tests.

use std::time::{Duration, Instant};

use azar_core::ResolverConfig;

/// RAII guard timing one test execution.
///
/// Started at construction, logged at drop: one debug line per test, a
/// warning instead when the elapsed time passes the slow threshold.
///
/// # Example
///
/// ```rust
/// use azar_observe::ExecutionTimer;
///
/// let _timer = ExecutionTimer::new("parses_header");
/// // test body
/// ```
#[derive(Debug)]
pub struct ExecutionTimer {
    test: String,
    threshold: Duration,
    start: Instant,
}

impl ExecutionTimer {
    /// Default threshold past which an execution is logged as slow.
    pub const DEFAULT_SLOW_THRESHOLD: Duration = Duration::from_secs(1);

    /// Starts a timer for the named test with the default threshold.
    #[must_use]
    pub fn new(test: impl Into<String>) -> Self {
        Self::with_threshold(test, Self::DEFAULT_SLOW_THRESHOLD)
    }

    /// Starts a timer with an explicit slow threshold.
    #[must_use]
    pub fn with_threshold(test: impl Into<String>, threshold: Duration) -> Self {
        Self {
            test: test.into(),
            threshold,
            start: Instant::now(),
        }
    }

    /// Starts a timer with the threshold from a resolver configuration.
    #[must_use]
    pub fn from_config(test: impl Into<String>, config: &ResolverConfig) -> Self {
        Self::with_threshold(test, config.slow_threshold)
    }

    /// Returns the elapsed time so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns the configured slow threshold.
    #[must_use]
    pub const fn threshold(&self) -> Duration {
        self.threshold
    }
}

impl Drop for ExecutionTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        if elapsed >= self.threshold {
            tracing::warn!(
                test = %self.test,
                elapsed = ?elapsed,
                threshold = ?self.threshold,
                "slow test execution"
            );
        } else {
            tracing::debug!(test = %self.test, elapsed = ?elapsed, "test executed");
        }
    }
}

/// Runs a closure under an [`ExecutionTimer`], returning its result.
pub fn time_execution<T>(test: &str, threshold: Duration, f: impl FnOnce() -> T) -> T {
    let _timer = ExecutionTimer::with_threshold(test, threshold);
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_measures_elapsed() {
        let timer = ExecutionTimer::new("sleepy");
        std::thread::sleep(Duration::from_millis(10));
        assert!(timer.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_timer_thresholds() {
        let timer = ExecutionTimer::new("default");
        assert_eq!(timer.threshold(), ExecutionTimer::DEFAULT_SLOW_THRESHOLD);

        let timer = ExecutionTimer::with_threshold("custom", Duration::from_millis(5));
        assert_eq!(timer.threshold(), Duration::from_millis(5));
    }

    #[test]
    fn test_timer_from_config() {
        let config = ResolverConfig {
            slow_threshold: Duration::from_millis(250),
            ..ResolverConfig::default()
        };
        let timer = ExecutionTimer::from_config("configured", &config);
        assert_eq!(timer.threshold(), Duration::from_millis(250));
    }

    #[test]
    fn test_drop_past_threshold_does_not_panic() {
        let timer = ExecutionTimer::with_threshold("slow", Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(5));
        drop(timer);
    }

    #[test]
    fn test_time_execution_returns_closure_result() {
        let result = time_execution("adds", Duration::from_secs(1), || 2 + 2);
        assert_eq!(result, 4);
    }
}
