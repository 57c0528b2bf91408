// Tests are allowed to use expect/unwrap for clear failure messages
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

//! Property tests for the resolver contract.

use azar_core::{Invocation, ResolverRegistry};
use proptest::prelude::*;

proptest! {
    /// Floats stay within the configured bound for any seed and any
    /// reasonable bound.
    #[test]
    fn float_draws_respect_bound(seed in any::<u64>(), bound in 1e-3f64..1e6) {
        let registry = ResolverRegistry::builder()
            .seed(seed)
            .float_bound(bound)
            .build();
        let invocation = Invocation::new("float_draws_respect_bound");
        for name in ["a", "b", "c"] {
            let d: f64 = registry.resolve_param(&invocation, name).unwrap();
            prop_assert!(d.abs() <= bound, "draw {} escaped bound {}", d, bound);
        }
    }

    /// Identically seeded registries replay identical sequences.
    #[test]
    fn seeded_sequences_replay(seed in any::<u64>()) {
        let a = ResolverRegistry::builder().seed(seed).build();
        let b = ResolverRegistry::builder().seed(seed).build();
        let inv_a = Invocation::new("replay");
        let inv_b = Invocation::new("replay");
        for name in ["i", "j", "k"] {
            let va: i64 = a.resolve_param(&inv_a, name).unwrap();
            let vb: i64 = b.resolve_param(&inv_b, name).unwrap();
            prop_assert_eq!(va, vb);
        }
    }

    /// Narrow integer parameters are the truncation of the same 64-bit
    /// draw: a u8 resolved from a seed equals the low byte of the i64
    /// resolved from that seed.
    #[test]
    fn narrow_draws_truncate_the_wide_draw(seed in any::<u64>()) {
        let wide = ResolverRegistry::builder().seed(seed).build();
        let narrow = ResolverRegistry::builder().seed(seed).build();
        let inv_wide = Invocation::new("wide");
        let inv_narrow = Invocation::new("narrow");

        let bits: i64 = wide.resolve_param(&inv_wide, "n").unwrap();
        let byte: u8 = narrow.resolve_param(&inv_narrow, "n").unwrap();
        prop_assert_eq!(byte, bits as u8);
    }

    /// Resolution counters add up regardless of the mix of draws.
    #[test]
    fn counters_add_up(ints in 0usize..8, floats in 0usize..8) {
        let registry = ResolverRegistry::standard();
        let invocation = Invocation::new("counters_add_up");
        for n in 0..ints {
            let _: i64 = registry.resolve_param(&invocation, &format!("i{n}")).unwrap();
        }
        for n in 0..floats {
            let _: f64 = registry.resolve_param(&invocation, &format!("d{n}")).unwrap();
        }
        let snapshot = registry.stats().snapshot();
        prop_assert_eq!(snapshot.integers, ints as u64);
        prop_assert_eq!(snapshot.floats, floats as u64);
        prop_assert_eq!(snapshot.failures, 0);
    }
}
