// Tests are allowed to use expect/unwrap for clear failure messages
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

//! Falsification tests for azar-core.
//!
//! # Reference
//! Popper, K. (1959). *The Logic of Scientific Discovery*. Routledge.
//!
//! Each test attempts to refute a specific claim about the resolver
//! contract. A passing test means the claim survived the attempt.

use azar_core::{
    Invocation, ParamKind, ParamSpec, ResolveError, ResolverConfig, ResolverRegistry,
};

/// F001: Falsify that an empty registry reports `NoResolver` rather than
/// producing a value from nowhere.
#[test]
fn f001_empty_registry_refuses_parameters() {
    let registry = ResolverRegistry::builder().without_random().build();
    let invocation = Invocation::new("f001");
    let err = registry.resolve_param::<i64>(&invocation, "i").unwrap_err();
    assert!(matches!(err, ResolveError::NoResolver { .. }));
    assert_eq!(registry.stats().failures(), 1);
}

/// F002: Falsify that the standard registry resolves opaque specs.
#[test]
fn f002_opaque_specs_never_resolve() {
    let registry = ResolverRegistry::standard();
    let invocation = Invocation::new("f002");
    let ctx = invocation.context(ParamSpec::opaque("x", "std::string::String"));
    let err = registry.resolve(&ctx).unwrap_err();
    assert!(err.is_type_failure());
}

/// F003: Falsify that successful resolutions leak into the failure
/// counter or vice versa.
#[test]
fn f003_counters_split_by_outcome() {
    let registry = ResolverRegistry::standard();
    let invocation = Invocation::new("f003");

    let _: i64 = registry.resolve_param(&invocation, "i").unwrap();
    let _: f64 = registry.resolve_param(&invocation, "d").unwrap();
    let ctx = invocation.context(ParamSpec::opaque("x", "X"));
    let _ = registry.resolve(&ctx);

    let snapshot = registry.stats().snapshot();
    assert_eq!(snapshot.integers, 1);
    assert_eq!(snapshot.floats, 1);
    assert_eq!(snapshot.failures, 1);
    assert_eq!(snapshot.total(), 3);
}

/// F004: Falsify that seeding leaves residual nondeterminism.
#[test]
fn f004_seeded_registries_replay_exactly() {
    let a = ResolverRegistry::builder().seed(0xDEAD_BEEF).build();
    let b = ResolverRegistry::builder().seed(0xDEAD_BEEF).build();
    let inv_a = Invocation::new("f004-a");
    let inv_b = Invocation::new("f004-b");

    for name in ["i", "j", "k", "l", "m"] {
        let va: i64 = a.resolve_param(&inv_a, name).unwrap();
        let vb: i64 = b.resolve_param(&inv_b, name).unwrap();
        assert_eq!(va, vb, "seeded draw diverged at `{name}`");
    }
}

/// F005: Falsify that two invocations share an identity.
#[test]
fn f005_invocations_are_distinct() {
    let a = Invocation::new("same_test");
    let b = Invocation::new("same_test");
    assert_ne!(a.id(), b.id());
}

/// F006: Falsify that degenerate configurations slip through validation.
#[test]
fn f006_degenerate_configs_rejected() {
    for bound in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let config = ResolverConfig {
            float_bound: bound,
            ..ResolverConfig::default()
        };
        assert!(config.validate().is_err(), "bound {bound} passed validation");
    }
}

/// F007: Falsify that narrow integer parameters escape their type's
/// range. Vacuously true for the type system, so instead check the draws
/// cover more than a sliver of the range: 64 draws of u8 collapsing to
/// one value would mean truncation is broken.
#[test]
fn f007_narrow_draws_vary() {
    let registry = ResolverRegistry::standard();
    let invocation = Invocation::new("f007");
    let mut seen = std::collections::HashSet::new();
    for _ in 0..64 {
        let byte: u8 = registry.resolve_param(&invocation, "b").unwrap();
        seen.insert(byte);
    }
    assert!(seen.len() > 1, "64 u8 draws produced a single value");
}

/// F008: Falsify that float resolutions can reach the bound itself.
/// The interval is half-open; the bound is excluded.
#[test]
fn f008_bound_is_exclusive_above() {
    let registry = ResolverRegistry::builder().float_bound(0.5).build();
    let invocation = Invocation::new("f008");
    for _ in 0..256 {
        let d: f64 = registry.resolve_param(&invocation, "d").unwrap();
        assert!(d < 0.5, "draw {d} reached the exclusive upper bound");
        assert!(d >= -0.5, "draw {d} escaped the inclusive lower bound");
    }
}
