//! Resolution counters.
//!
//! Make resolution activity visible at a glance: how many parameters a
//! registry has resolved, of which kinds, and how many resolutions failed.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::types::ParamKind;

/// Resolution counters for one registry.
///
/// Thread-safe and cheap to clone; clones share the same counters.
#[derive(Debug, Clone)]
pub struct ResolutionStats {
    inner: Arc<StatsInner>,
}

#[derive(Debug)]
struct StatsInner {
    integers: AtomicU64,
    floats: AtomicU64,
    failures: AtomicU64,
}

impl ResolutionStats {
    /// Creates a fresh set of counters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(StatsInner {
                integers: AtomicU64::new(0),
                floats: AtomicU64::new(0),
                failures: AtomicU64::new(0),
            }),
        }
    }

    /// Records a successful resolution of the given kind.
    pub fn record(&self, kind: ParamKind) {
        match kind {
            ParamKind::Integer => self.inner.integers.fetch_add(1, Ordering::Relaxed),
            ParamKind::Float => self.inner.floats.fetch_add(1, Ordering::Relaxed),
            // Opaque never resolves successfully; count it as a failure
            // if it somehow gets here.
            ParamKind::Opaque => self.inner.failures.fetch_add(1, Ordering::Relaxed),
        };
    }

    /// Records a failed resolution.
    pub fn record_failure(&self) {
        self.inner.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns total integer resolutions.
    #[must_use]
    pub fn integers(&self) -> u64 {
        self.inner.integers.load(Ordering::Relaxed)
    }

    /// Returns total float resolutions.
    #[must_use]
    pub fn floats(&self) -> u64 {
        self.inner.floats.load(Ordering::Relaxed)
    }

    /// Returns total failed resolutions.
    #[must_use]
    pub fn failures(&self) -> u64 {
        self.inner.failures.load(Ordering::Relaxed)
    }

    /// Returns total resolutions, successful or not.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.integers() + self.floats() + self.failures()
    }

    /// Takes a point-in-time snapshot of the counters.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            integers: self.integers(),
            floats: self.floats(),
            failures: self.failures(),
        }
    }
}

impl Default for ResolutionStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time view of [`ResolutionStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Integer resolutions at snapshot time.
    pub integers: u64,
    /// Float resolutions at snapshot time.
    pub floats: u64,
    /// Failed resolutions at snapshot time.
    pub failures: u64,
}

impl StatsSnapshot {
    /// Returns total resolutions in this snapshot.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.integers + self.floats + self.failures
    }
}
