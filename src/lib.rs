//! azar: Randomized Test-Parameter Injection
//!
//! Mark test parameters with `#[random]`, annotate the test with
//! [`macro@randomized`], and the framework supplies uniformly distributed
//! values at invocation time.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use azar::randomized;
//!
//! #[randomized]
//! fn injects_integer(#[random] i: i64, #[random] j: i64) {
//!     assert_ne!(i, j);
//! }
//!
//! #[randomized]
//! fn injects_float(#[random] d: f64) {
//!     assert!(d.abs() <= 1.0);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub use azar_core as core;
pub use azar_observe as observe;

pub use azar_core::{
    FromResolved, Invocation, InvocationId, ParamKind, ParamSpec, ParameterResolver,
    RandomResolver, ResolutionContext, ResolutionStats, ResolveError, ResolverConfig,
    ResolverRegistry, ResolverRegistryBuilder, ResolvedValue, StatsSnapshot,
};
pub use azar_macros::randomized;
pub use azar_observe::{CaseReport, CaseSet, ExecutionTimer, LifecycleLogger};

/// Prelude module for common imports.
pub mod prelude {
    pub use azar_core::{
        Invocation, ParamKind, ParamSpec, ParameterResolver, RandomResolver, ResolverConfig,
        ResolverRegistry, ResolvedValue,
    };
    pub use azar_macros::randomized;
    pub use azar_observe::{CaseSet, ExecutionTimer, LifecycleLogger};
}
