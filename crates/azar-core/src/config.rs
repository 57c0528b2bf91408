//! Resolver configuration.
//!
//! Configuration is validated at load time, with sensible defaults and
//! clear error messages.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ResolveError, Result};

/// Configuration for a resolver registry.
///
/// Every field has a default, so `ResolverConfig::default()` is a complete,
/// valid configuration and a TOML file only needs the fields it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Half-width of the interval random floats are drawn from.
    ///
    /// Floats land in `[-float_bound, float_bound)`.
    #[serde(default = "default_float_bound")]
    pub float_bound: f64,

    /// Seed for reproducible resolution.
    ///
    /// `None` draws from the thread-local entropy source; every resolution
    /// is then independent and stateless.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Elapsed time past which a timed test execution logs a warning.
    #[serde(default = "default_slow_threshold")]
    #[serde(with = "humantime_serde")]
    pub slow_threshold: Duration,
}

fn default_float_bound() -> f64 {
    1.0
}

fn default_slow_threshold() -> Duration {
    Duration::from_secs(1)
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            float_bound: default_float_bound(),
            seed: None,
            slow_threshold: default_slow_threshold(),
        }
    }
}

impl ResolverConfig {
    /// Creates a seeded configuration.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text does not parse or fails validation.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, does not parse, or
    /// fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.float_bound.is_finite() {
            return Err(ResolveError::config("float_bound must be finite"));
        }
        if self.float_bound <= 0.0 {
            return Err(ResolveError::config(format!(
                "float_bound must be positive, got {}",
                self.float_bound
            )));
        }
        if self.slow_threshold.is_zero() {
            return Err(ResolveError::config("slow_threshold must be non-zero"));
        }
        Ok(())
    }
}
