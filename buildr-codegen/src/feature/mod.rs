//! Capability detection for the target compiler.
//!
//! Generation strategies branch on *what the compiler supports*, never on
//! compiler internals. Each [`FeatureType`] knows how to derive its value
//! from a live [`Environment`], or supply a conservative default when there
//! is none (unit tests, offline rendering). A [`FeatureRegistry`] holds the
//! resolved values for one generation run.
//!
//! ```
//! use buildr_codegen::feature::{CompilerEnvironment, FeatureRegistry, SOURCE_LEVEL, SourceLevel};
//!
//! let env = CompilerEnvironment::new("1.7".parse().unwrap());
//! let features = FeatureRegistry::standard(&env);
//!
//! assert_eq!(*features.get(&SOURCE_LEVEL), SourceLevel::Java7);
//! assert!(features.get(&SOURCE_LEVEL).supports_diamond_operator());
//! ```

mod environment;
mod feature_type;
mod registry;
mod source_level;

pub use environment::{CompilerEnvironment, Environment};
pub use feature_type::FeatureType;
pub use registry::{FeatureRegistry, FeatureRegistryBuilder, Origin};
pub use source_level::{Capability, SOURCE_LEVEL, SourceLevel, SourceLevelFeature};
