//! Resolver registration and dispatch.
//!
//! The registry is the registration mechanism of the framework: tests (or
//! the `#[randomized]` macro on their behalf) build a registry, and each
//! marked parameter is dispatched to the first resolver that claims it.

use crate::config::ResolverConfig;
use crate::error::{ResolveError, Result};
use crate::resolver::{ParameterResolver, RandomResolver};
use crate::stats::ResolutionStats;
use crate::types::{Invocation, ParamKind, ParamSpec, ResolutionContext, ResolvedValue};

/// Conversion from a [`ResolvedValue`] into a concrete parameter type.
///
/// Implemented for every integer primitive up to 64 bits and for the float
/// primitives. Integer conversions truncate the 64 uniform bits a
/// resolution carries, which keeps the result uniform over the narrower
/// type's full range.
pub trait FromResolved: Sized {
    /// The kind requested from the registry for this type.
    const KIND: ParamKind;

    /// The declared type name used in specs and error messages.
    const DECLARED: &'static str;

    /// Converts a resolved value, returning `None` on a kind mismatch.
    fn from_resolved(value: ResolvedValue) -> Option<Self>;
}

macro_rules! impl_from_resolved_int {
    ($($ty:ty),* $(,)?) => {$(
        impl FromResolved for $ty {
            const KIND: ParamKind = ParamKind::Integer;
            const DECLARED: &'static str = stringify!($ty);

            fn from_resolved(value: ResolvedValue) -> Option<Self> {
                match value {
                    ResolvedValue::Integer(bits) => Some(bits as $ty),
                    ResolvedValue::Float(_) => None,
                }
            }
        }
    )*};
}

impl_from_resolved_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromResolved for f64 {
    const KIND: ParamKind = ParamKind::Float;
    const DECLARED: &'static str = "f64";

    fn from_resolved(value: ResolvedValue) -> Option<Self> {
        match value {
            ResolvedValue::Float(v) => Some(v),
            ResolvedValue::Integer(_) => None,
        }
    }
}

impl FromResolved for f32 {
    const KIND: ParamKind = ParamKind::Float;
    const DECLARED: &'static str = "f32";

    fn from_resolved(value: ResolvedValue) -> Option<Self> {
        match value {
            ResolvedValue::Float(v) => Some(v as f32),
            ResolvedValue::Integer(_) => None,
        }
    }
}

/// Ordered set of resolvers with per-registry counters.
///
/// Dispatch is first-match: resolvers registered through the builder are
/// consulted in registration order, with the built-in [`RandomResolver`]
/// last as the fallback.
pub struct ResolverRegistry {
    resolvers: Vec<Box<dyn ParameterResolver>>,
    stats: ResolutionStats,
    config: ResolverConfig,
}

impl ResolverRegistry {
    /// Creates a registry builder.
    #[must_use]
    pub fn builder() -> ResolverRegistryBuilder {
        ResolverRegistryBuilder::default()
    }

    /// Creates the standard registry: the built-in random resolver with
    /// default configuration.
    #[must_use]
    pub fn standard() -> Self {
        Self::builder().build()
    }

    /// Creates a registry from a validated configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration fails validation.
    pub fn from_config(config: ResolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::builder().config(config).build())
    }

    /// Returns the registry's configuration.
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Returns the registry's resolution counters.
    #[must_use]
    pub const fn stats(&self) -> &ResolutionStats {
        &self.stats
    }

    /// Resolves one parameter, dispatching to the first willing resolver.
    ///
    /// This is the resolution callback surface: called once per marked
    /// parameter at test-invocation time.
    ///
    /// # Errors
    /// Returns an error if no resolver claims the parameter or the
    /// claiming resolver fails.
    pub fn resolve(&self, ctx: &ResolutionContext<'_>) -> Result<ResolvedValue> {
        match self.resolve_inner(ctx) {
            Ok((_, value)) => {
                self.stats.record(value.kind());
                Ok(value)
            }
            Err(err) => {
                self.stats.record_failure();
                Err(err)
            }
        }
    }

    /// Resolves one parameter directly into its declared type.
    ///
    /// # Errors
    /// Returns an error if resolution fails or the claiming resolver
    /// produced a value of the wrong kind.
    pub fn resolve_param<T: FromResolved>(&self, invocation: &Invocation, name: &str) -> Result<T> {
        let spec = ParamSpec::new(name, T::KIND, T::DECLARED);
        let ctx = invocation.context(spec);
        match self.resolve_inner(&ctx) {
            Ok((resolver, value)) => match T::from_resolved(value) {
                Some(typed) => {
                    self.stats.record(T::KIND);
                    Ok(typed)
                }
                None => {
                    self.stats.record_failure();
                    Err(ResolveError::Mismatch {
                        resolver,
                        produced: value.kind().to_string(),
                        declared: T::DECLARED.to_string(),
                    })
                }
            },
            Err(err) => {
                self.stats.record_failure();
                Err(err)
            }
        }
    }

    fn resolve_inner(&self, ctx: &ResolutionContext<'_>) -> Result<(String, ResolvedValue)> {
        for resolver in &self.resolvers {
            if resolver.supports(ctx.spec()) {
                let value = resolver.resolve(ctx)?;
                return Ok((resolver.name().to_string(), value));
            }
        }
        tracing::debug!(
            test = ctx.invocation().test(),
            param = ctx.spec().name(),
            declared = ctx.spec().declared_type(),
            "no resolver accepted parameter"
        );
        Err(ResolveError::no_resolver(
            ctx.spec().name(),
            ctx.spec().declared_type(),
        ))
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builder for [`ResolverRegistry`].
#[derive(Default)]
pub struct ResolverRegistryBuilder {
    config: ResolverConfig,
    extra: Vec<Box<dyn ParameterResolver>>,
    without_random: bool,
}

impl ResolverRegistryBuilder {
    /// Replaces the configuration wholesale.
    #[must_use]
    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Seeds the built-in random resolver for reproducible runs.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Sets the float bound of the built-in random resolver.
    #[must_use]
    pub fn float_bound(mut self, bound: f64) -> Self {
        self.config.float_bound = bound;
        self
    }

    /// Registers an additional resolver, consulted before the built-in one.
    #[must_use]
    pub fn register(mut self, resolver: impl ParameterResolver + 'static) -> Self {
        self.extra.push(Box::new(resolver));
        self
    }

    /// Omits the built-in random resolver from the registry.
    #[must_use]
    pub fn without_random(mut self) -> Self {
        self.without_random = true;
        self
    }

    /// Builds the registry.
    #[must_use]
    pub fn build(self) -> ResolverRegistry {
        let mut resolvers = self.extra;
        if !self.without_random {
            resolvers.push(Box::new(RandomResolver::from_config(&self.config)));
        }
        ResolverRegistry {
            resolvers,
            stats: ResolutionStats::new(),
            config: self.config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_resolves_integers() {
        let registry = ResolverRegistry::standard();
        let invocation = Invocation::new("registry_test");
        let _value: i64 = registry.resolve_param(&invocation, "i").unwrap();
        assert_eq!(registry.stats().integers(), 1);
    }

    #[test]
    fn test_standard_resolves_floats_within_bound() {
        let registry = ResolverRegistry::standard();
        let invocation = Invocation::new("registry_test");
        for _ in 0..50 {
            let d: f64 = registry.resolve_param(&invocation, "d").unwrap();
            assert!(d.abs() <= 1.0);
        }
        assert_eq!(registry.stats().floats(), 50);
    }

    #[test]
    fn test_two_integers_in_one_invocation_differ() {
        // Statistically distinct, not distinct by construction: a
        // collision has probability 2^-64 per run.
        let registry = ResolverRegistry::standard();
        let invocation = Invocation::new("registry_test");
        let i: i64 = registry.resolve_param(&invocation, "i").unwrap();
        let j: i64 = registry.resolve_param(&invocation, "j").unwrap();
        assert_ne!(i, j);
    }

    #[test]
    fn test_narrow_integer_types_resolve() {
        let registry = ResolverRegistry::standard();
        let invocation = Invocation::new("registry_test");
        let _: i8 = registry.resolve_param(&invocation, "a").unwrap();
        let _: u16 = registry.resolve_param(&invocation, "b").unwrap();
        let _: u64 = registry.resolve_param(&invocation, "c").unwrap();
        let _: usize = registry.resolve_param(&invocation, "d").unwrap();
        let _: f32 = registry.resolve_param(&invocation, "e").unwrap();
        assert_eq!(registry.stats().total(), 5);
    }

    #[test]
    fn test_opaque_spec_fails_with_no_resolver() {
        let registry = ResolverRegistry::standard();
        let invocation = Invocation::new("registry_test");
        let ctx = invocation.context(ParamSpec::opaque("x", "String"));
        let err = registry.resolve(&ctx).unwrap_err();
        assert!(matches!(err, ResolveError::NoResolver { .. }));
        assert_eq!(registry.stats().failures(), 1);
    }

    #[test]
    fn test_empty_registry_resolves_nothing() {
        let registry = ResolverRegistry::builder().without_random().build();
        let invocation = Invocation::new("registry_test");
        let err = registry.resolve_param::<i64>(&invocation, "i").unwrap_err();
        assert!(matches!(err, ResolveError::NoResolver { .. }));
    }

    #[test]
    fn test_seeded_registries_are_deterministic() {
        let a = ResolverRegistry::builder().seed(1234).build();
        let b = ResolverRegistry::builder().seed(1234).build();
        let inv_a = Invocation::new("registry_test");
        let inv_b = Invocation::new("registry_test");
        for name in ["i", "j", "k"] {
            let va: i64 = a.resolve_param(&inv_a, name).unwrap();
            let vb: i64 = b.resolve_param(&inv_b, name).unwrap();
            assert_eq!(va, vb);
        }
    }

    #[test]
    fn test_from_config_validates() {
        let config = ResolverConfig {
            float_bound: -1.0,
            ..ResolverConfig::default()
        };
        assert!(ResolverRegistry::from_config(config).is_err());
    }

    #[test]
    fn test_custom_resolver_wins_over_builtin() {
        struct FixedResolver;

        impl ParameterResolver for FixedResolver {
            fn name(&self) -> &str {
                "fixed"
            }

            fn supports(&self, spec: &ParamSpec) -> bool {
                spec.kind() == ParamKind::Integer
            }

            fn resolve(&self, _ctx: &ResolutionContext<'_>) -> Result<ResolvedValue> {
                Ok(ResolvedValue::Integer(41))
            }
        }

        let registry = ResolverRegistry::builder().register(FixedResolver).build();
        let invocation = Invocation::new("registry_test");
        let i: i64 = registry.resolve_param(&invocation, "i").unwrap();
        assert_eq!(i, 41);

        // Floats still fall through to the built-in resolver.
        let d: f64 = registry.resolve_param(&invocation, "d").unwrap();
        assert!(d.abs() <= 1.0);
    }

    #[test]
    fn test_kind_mismatch_is_reported() {
        struct LyingResolver;

        impl ParameterResolver for LyingResolver {
            fn name(&self) -> &str {
                "lying"
            }

            fn supports(&self, _spec: &ParamSpec) -> bool {
                true
            }

            fn resolve(&self, _ctx: &ResolutionContext<'_>) -> Result<ResolvedValue> {
                Ok(ResolvedValue::Float(0.5))
            }
        }

        let registry = ResolverRegistry::builder()
            .register(LyingResolver)
            .without_random()
            .build();
        let invocation = Invocation::new("registry_test");
        let err = registry.resolve_param::<i64>(&invocation, "i").unwrap_err();
        assert!(matches!(err, ResolveError::Mismatch { .. }));
        assert_eq!(registry.stats().failures(), 1);
    }

    #[test]
    fn test_from_resolved_truncation() {
        let byte = u8::from_resolved(ResolvedValue::Integer(0x1234)).unwrap();
        assert_eq!(byte, 0x34);

        let signed = i8::from_resolved(ResolvedValue::Integer(-1)).unwrap();
        assert_eq!(signed, -1);
    }

    #[test]
    fn test_from_resolved_kind_mismatch() {
        assert!(i64::from_resolved(ResolvedValue::Float(0.5)).is_none());
        assert!(f64::from_resolved(ResolvedValue::Integer(1)).is_none());
    }
}
