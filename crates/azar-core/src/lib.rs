// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # azar-core
//!
//! Parameter resolution primitives for the azar test framework.
//!
//! This crate provides the foundational types and traits for supplying
//! generated values to marked test-function parameters:
//!
//! - [`ParameterResolver`] trait for implementing resolution extensions
//! - [`RandomResolver`] supplying uniformly distributed primitives
//! - [`ResolverRegistry`] dispatching each parameter to the first willing
//!   resolver
//! - [`ResolverConfig`] for bound, seed, and threshold configuration
//! - [`ResolutionStats`] for per-registry resolution counters
//!
//! ## Example
//!
//! ```rust
//! use azar_core::{ResolverRegistry, Invocation};
//!
//! let registry = ResolverRegistry::standard();
//! let invocation = Invocation::new("doc_example");
//!
//! let n: i64 = registry.resolve_param(&invocation, "n").unwrap();
//! let d: f64 = registry.resolve_param(&invocation, "d").unwrap();
//! assert!(d.abs() <= 1.0);
//! let _ = n;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod stats;
pub mod types;

pub use config::ResolverConfig;
pub use error::{ResolveError, Result};
pub use registry::{FromResolved, ResolverRegistry, ResolverRegistryBuilder};
pub use resolver::{ParameterResolver, RandomResolver};
pub use stats::{ResolutionStats, StatsSnapshot};
pub use types::{
    Invocation, InvocationId, ParamKind, ParamSpec, ResolutionContext, ResolvedValue,
};
