//! Core types for parameter resolution.
//!
//! UUIDs for invocation identity, explicit parameter kinds, no implicit
//! conversions between them.

use serde::{Deserialize, Serialize};

/// Unique identifier for a single test invocation.
///
/// UUIDs rather than counters, so identifiers stay stable when the host
/// runner shuffles or repeats tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationId(uuid::Uuid);

impl InvocationId {
    /// Creates a new random invocation ID.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Creates an invocation ID from a UUID.
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One test invocation.
///
/// Ephemeral: created when the test body starts, dropped when it returns.
/// Carries no resolution state; every parameter is resolved independently.
#[derive(Debug, Clone)]
pub struct Invocation {
    id: InvocationId,
    test: String,
}

impl Invocation {
    /// Creates an invocation for the named test.
    #[must_use]
    pub fn new(test: impl Into<String>) -> Self {
        Self {
            id: InvocationId::new(),
            test: test.into(),
        }
    }

    /// Returns the invocation ID.
    #[must_use]
    pub const fn id(&self) -> InvocationId {
        self.id
    }

    /// Returns the test name.
    #[must_use]
    pub fn test(&self) -> &str {
        &self.test
    }

    /// Builds the resolution context for one parameter of this invocation.
    #[must_use]
    pub fn context(&self, spec: ParamSpec) -> ResolutionContext<'_> {
        ResolutionContext {
            invocation: self,
            spec,
        }
    }
}

/// The kind of value a parameter requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKind {
    /// Any integer primitive up to 64 bits.
    Integer,
    /// `f32` or `f64`.
    Float,
    /// A declared type no resolver understands.
    Opaque,
}

impl ParamKind {
    /// Returns true if a [`RandomResolver`](crate::RandomResolver) can
    /// produce this kind.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Opaque => write!(f, "opaque"),
        }
    }
}

/// A single parameter awaiting resolution: name, kind, and the declared
/// type as written in the test signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    name: String,
    kind: ParamKind,
    declared_type: String,
}

impl ParamSpec {
    /// Creates a parameter spec.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: ParamKind,
        declared_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            declared_type: declared_type.into(),
        }
    }

    /// Creates an integer parameter spec.
    #[must_use]
    pub fn integer(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Integer, declared_type)
    }

    /// Creates a float parameter spec.
    #[must_use]
    pub fn float(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Float, declared_type)
    }

    /// Creates a spec for a declared type no built-in resolver understands.
    #[must_use]
    pub fn opaque(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Opaque, declared_type)
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameter kind.
    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        self.kind
    }

    /// Returns the declared type name.
    #[must_use]
    pub fn declared_type(&self) -> &str {
        &self.declared_type
    }
}

/// Context handed to a resolver: one parameter of one invocation.
///
/// Scoped to a single resolution call; resolvers must not retain it.
#[derive(Debug)]
pub struct ResolutionContext<'a> {
    invocation: &'a Invocation,
    spec: ParamSpec,
}

impl ResolutionContext<'_> {
    /// Returns the invocation this resolution belongs to.
    #[must_use]
    pub const fn invocation(&self) -> &Invocation {
        self.invocation
    }

    /// Returns the parameter being resolved.
    #[must_use]
    pub const fn spec(&self) -> &ParamSpec {
        &self.spec
    }
}

/// A resolved parameter value.
///
/// Integers are carried as 64 uniform bits; narrower integer parameters
/// truncate, which preserves uniformity over the narrower range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedValue {
    /// 64 uniformly distributed bits.
    Integer(i64),
    /// A float within the resolver's configured bound.
    Float(f64),
}

impl ResolvedValue {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        match self {
            Self::Integer(_) => ParamKind::Integer,
            Self::Float(_) => ParamKind::Float,
        }
    }
}

impl std::fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}
