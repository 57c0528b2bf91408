// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # azar-observe
//!
//! Lifecycle logging and timing mixins for the azar test framework.
//!
//! This crate provides:
//! - [`LifecycleLogger`]: default-method mixin logging suite and test
//!   lifecycle events
//! - [`ExecutionTimer`]: RAII guard logging elapsed test time, warning
//!   past a slow threshold
//! - [`CaseSet`]: named predicate cases run and reported as a batch
//! - [`telemetry::init`]: env-filter subscriber installation for demos
//!   and harnesses
//!
//! ## Example
//!
//! ```rust
//! use azar_observe::{ExecutionTimer, LifecycleLogger};
//!
//! struct DemoSuite;
//!
//! impl LifecycleLogger for DemoSuite {
//!     fn suite(&self) -> &str {
//!         "demo"
//!     }
//! }
//!
//! let suite = DemoSuite;
//! suite.on_test_start("is_equal_value");
//! let timer = ExecutionTimer::new("is_equal_value");
//! assert_eq!(1, "a".len());
//! drop(timer);
//! suite.on_test_success("is_equal_value");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod cases;
pub mod error;
pub mod lifecycle;
pub mod telemetry;
pub mod timing;

pub use cases::{CaseReport, CaseSet};
pub use error::{ObserveError, Result};
pub use lifecycle::LifecycleLogger;
pub use timing::{ExecutionTimer, time_execution};
