//! Suite lifecycle logging mixin.
//!
//! Implementing [`LifecycleLogger`] on a marker type gives a test suite
//! structured start/finish logging without writing any of it: every hook
//! has a default body. Override individual hooks where a suite needs
//! more than the log line.

/// Default-method mixin logging suite and test lifecycle events.
///
/// The only required method is [`suite`](Self::suite); every hook logs
/// through `tracing` by default.
///
/// # Example
///
/// ```rust
/// use azar_observe::LifecycleLogger;
///
/// struct ParserSuite;
///
/// impl LifecycleLogger for ParserSuite {
///     fn suite(&self) -> &str {
///         "parser"
///     }
/// }
///
/// let suite = ParserSuite;
/// suite.on_suite_start();
/// suite.on_test_start("rejects_empty_input");
/// suite.on_test_success("rejects_empty_input");
/// suite.on_suite_end();
/// ```
pub trait LifecycleLogger {
    /// Returns the suite name used in every log line.
    fn suite(&self) -> &str;

    /// Called once before the suite's tests run.
    fn on_suite_start(&self) {
        tracing::info!(suite = self.suite(), "suite starting");
    }

    /// Called before each test body.
    fn on_test_start(&self, test: &str) {
        tracing::info!(suite = self.suite(), test = test, "about to execute test");
    }

    /// Called after a test body returns normally.
    fn on_test_success(&self, test: &str) {
        tracing::info!(suite = self.suite(), test = test, "finished executing test");
    }

    /// Called after a test body fails.
    fn on_test_failure(&self, test: &str, reason: &str) {
        tracing::warn!(
            suite = self.suite(),
            test = test,
            reason = reason,
            "test failed"
        );
    }

    /// Called once after the suite's tests ran.
    fn on_suite_end(&self) {
        tracing::info!(suite = self.suite(), "suite finished");
    }
}
