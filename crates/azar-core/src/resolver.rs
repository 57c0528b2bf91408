//! The resolver contract and the built-in random resolver.
//!
//! Every resolver follows the same two-step contract: claim a parameter
//! via [`ParameterResolver::supports`], then produce its value via
//! [`ParameterResolver::resolve`]. The registry never calls `resolve` for
//! a parameter the resolver did not claim.

use parking_lot::Mutex;
use rand::distributions::Standard;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ResolverConfig;
use crate::error::{ResolveError, Result};
use crate::types::{ParamKind, ParamSpec, ResolutionContext, ResolvedValue};

/// Resolution extension supplying values for marked test parameters.
///
/// Implementations must be stateless with respect to invocations: the
/// registry may share one resolver across every test the host runner
/// executes, on any thread.
pub trait ParameterResolver: Send + Sync {
    /// Returns the resolver's name, used in error messages and logs.
    fn name(&self) -> &str;

    /// Returns true if this resolver can produce a value for the parameter.
    fn supports(&self, spec: &ParamSpec) -> bool;

    /// Produces a value for the parameter.
    ///
    /// Called once per claimed parameter at test-invocation time.
    ///
    /// # Errors
    /// Returns an error if the parameter cannot be resolved after all.
    fn resolve(&self, ctx: &ResolutionContext<'_>) -> Result<ResolvedValue>;
}

/// Where the random resolver draws its bits from.
enum RandomSource {
    /// Fresh thread-local generator per resolution. Stateless.
    Entropy,
    /// A seeded generator stepped across resolutions. Reproducible.
    Seeded(Mutex<StdRng>),
}

impl std::fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entropy => write!(f, "Entropy"),
            Self::Seeded(_) => write!(f, "Seeded"),
        }
    }
}

/// Built-in resolver producing uniformly distributed primitive values.
///
/// - Integer parameters get 64 uniform bits, covering the full
///   representable range of every integer primitive up to 64 bits.
/// - Float parameters get a uniform draw from
///   `[-float_bound, float_bound)`, centered near zero.
#[derive(Debug)]
pub struct RandomResolver {
    bound: f64,
    source: RandomSource,
}

impl RandomResolver {
    /// Creates a resolver drawing from thread-local entropy with the
    /// default float bound.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&ResolverConfig::default())
    }

    /// Creates a resolver from a configuration.
    ///
    /// The caller is expected to have validated the configuration; an
    /// unvalidated non-positive bound makes every float resolution fail.
    #[must_use]
    pub fn from_config(config: &ResolverConfig) -> Self {
        let source = match config.seed {
            Some(seed) => RandomSource::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
            None => RandomSource::Entropy,
        };
        Self {
            bound: config.float_bound,
            source,
        }
    }

    /// Creates a reproducible resolver stepping a seeded generator.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_config(&ResolverConfig::seeded(seed))
    }

    /// Returns the configured float bound.
    #[must_use]
    pub const fn float_bound(&self) -> f64 {
        self.bound
    }

    fn draw_integer(&self) -> i64 {
        match &self.source {
            RandomSource::Entropy => rand::thread_rng().sample(Standard),
            RandomSource::Seeded(rng) => rng.lock().sample(Standard),
        }
    }

    fn draw_float(&self) -> Result<f64> {
        // gen_range panics on an empty range; validated configs exclude
        // that, but resolvers built from raw parts must not bring the
        // host runner down with an opaque panic.
        if !(self.bound.is_finite() && self.bound > 0.0) {
            return Err(ResolveError::config(format!(
                "float_bound must be positive and finite, got {}",
                self.bound
            )));
        }
        let value = match &self.source {
            RandomSource::Entropy => rand::thread_rng().gen_range(-self.bound..self.bound),
            RandomSource::Seeded(rng) => rng.lock().gen_range(-self.bound..self.bound),
        };
        Ok(value)
    }
}

impl Default for RandomResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterResolver for RandomResolver {
    fn name(&self) -> &str {
        "random"
    }

    fn supports(&self, spec: &ParamSpec) -> bool {
        spec.kind().is_numeric()
    }

    fn resolve(&self, ctx: &ResolutionContext<'_>) -> Result<ResolvedValue> {
        let spec = ctx.spec();
        let value = match spec.kind() {
            ParamKind::Integer => ResolvedValue::Integer(self.draw_integer()),
            ParamKind::Float => ResolvedValue::Float(self.draw_float()?),
            ParamKind::Opaque => {
                return Err(ResolveError::unsupported(spec.declared_type()));
            }
        };
        tracing::trace!(
            test = ctx.invocation().test(),
            param = spec.name(),
            kind = %spec.kind(),
            value = %value,
            "resolved parameter"
        );
        Ok(value)
    }
}
