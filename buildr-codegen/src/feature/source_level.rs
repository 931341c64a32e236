//! Java language levels the generator emits idiomatic code for.

use std::fmt;

use buildr_core::{QualifiedName, SourceVersion};

use super::{Environment, FeatureType};

/// Compliance levels the generator distinguishes between.
///
/// Levels are totally ordered, and a higher level has every capability of
/// the levels below it. Prefer the capability queries
/// (`level.supports_diamond_operator()`) over comparing levels directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceLevel {
    Java6,
    Java7,
    Java8,
}

/// A language capability that only some levels support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `new ArrayList<>()`.
    DiamondOperator,
    /// `java.util.Objects` is on the platform.
    JavaUtilObjects,
    /// Lambda expressions and method references.
    Lambdas,
}

impl Capability {
    pub const ALL: [Capability; 3] = [
        Capability::DiamondOperator,
        Capability::JavaUtilObjects,
        Capability::Lambdas,
    ];

    /// The lowest level providing this capability.
    pub fn introduced_in(&self) -> SourceLevel {
        match self {
            Self::DiamondOperator | Self::JavaUtilObjects => SourceLevel::Java7,
            Self::Lambdas => SourceLevel::Java8,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::DiamondOperator => "diamond operator",
            Self::JavaUtilObjects => "java.util.Objects",
            Self::Lambdas => "lambdas",
        }
    }
}

impl SourceLevel {
    pub const ALL: [SourceLevel; 3] = [SourceLevel::Java6, SourceLevel::Java7, SourceLevel::Java8];

    /// Map a compiler `-source` version onto the nearest level at or below it.
    pub fn for_version(version: SourceVersion) -> Self {
        match version.release() {
            ..=6 => Self::Java6,
            7 => Self::Java7,
            _ => Self::Java8,
        }
    }

    pub fn supports(&self, capability: Capability) -> bool {
        *self >= capability.introduced_in()
    }

    pub fn supports_diamond_operator(&self) -> bool {
        self.supports(Capability::DiamondOperator)
    }

    pub fn supports_lambdas(&self) -> bool {
        self.supports(Capability::Lambdas)
    }

    /// `java.util.Objects`, if the platform has it.
    pub fn java_util_objects(&self) -> Option<QualifiedName> {
        self.supports(Capability::JavaUtilObjects)
            .then(|| QualifiedName::of("java.util", "Objects"))
    }
}

impl fmt::Display for SourceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Java6 => write!(f, "Java 6"),
            Self::Java7 => write!(f, "Java 7"),
            Self::Java8 => write!(f, "Java 8"),
        }
    }
}

/// Key type for [`SOURCE_LEVEL`].
#[derive(Debug, Clone, Copy)]
pub struct SourceLevelFeature;

/// Pass to [`FeatureRegistry::get`](super::FeatureRegistry::get) to get the
/// current [`SourceLevel`].
pub const SOURCE_LEVEL: SourceLevelFeature = SourceLevelFeature;

impl FeatureType for SourceLevelFeature {
    type Value = SourceLevel;

    fn name(&self) -> &'static str {
        "source level"
    }

    fn resolve(&self, env: &dyn Environment) -> SourceLevel {
        SourceLevel::for_version(env.source_version())
    }

    fn test_default(&self) -> SourceLevel {
        SourceLevel::Java6
    }
}
