//! Error types for azar-core.
//!
//! All errors are explicit; resolution failures surface to the host runner
//! as test failures rather than being swallowed.

/// Result type alias for resolution operations.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Comprehensive error type for parameter resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The declared parameter type cannot be resolved.
    #[error("unsupported parameter type: {0}")]
    Unsupported(String),

    /// No registered resolver accepted the parameter.
    #[error("no resolver accepted parameter `{param}` of type {declared}")]
    NoResolver {
        /// The parameter name.
        param: String,
        /// The declared type name.
        declared: String,
    },

    /// A resolver produced a value of the wrong kind.
    #[error("resolver `{resolver}` produced a {produced} value for {declared}")]
    Mismatch {
        /// The resolver that produced the value.
        resolver: String,
        /// The kind that was produced.
        produced: String,
        /// The declared type name.
        declared: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while loading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parse error.
    #[error("configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ResolveError {
    /// Creates an unsupported-type error.
    #[must_use]
    pub fn unsupported(declared: impl Into<String>) -> Self {
        Self::Unsupported(declared.into())
    }

    /// Creates a no-resolver error.
    #[must_use]
    pub fn no_resolver(param: impl Into<String>, declared: impl Into<String>) -> Self {
        Self::NoResolver {
            param: param.into(),
            declared: declared.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns true if this failure came from the parameter's declared type
    /// rather than from the registry or its configuration.
    #[must_use]
    pub const fn is_type_failure(&self) -> bool {
        matches!(self, Self::Unsupported(_) | Self::NoResolver { .. } | Self::Mismatch { .. })
    }
}
