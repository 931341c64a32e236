use std::fmt;

use super::Environment;

/// Descriptor for one kind of feature.
///
/// Implementors are stateless unit structs exposed as constants (see
/// [`SOURCE_LEVEL`](super::SOURCE_LEVEL)); the constant is the lookup key
/// passed to [`FeatureRegistry::get`](super::FeatureRegistry::get).
pub trait FeatureType: Send + Sync + 'static {
    /// The resolved value, typically an ordered capability tier.
    type Value: fmt::Display + Send + Sync + 'static;

    /// Human-readable name, used in logs and panic messages.
    fn name(&self) -> &'static str;

    /// Inspect the environment and return the best matching value.
    ///
    /// Must be free of side effects.
    fn resolve(&self, env: &dyn Environment) -> Self::Value;

    /// A conservative value for when no environment is available.
    fn test_default(&self) -> Self::Value;
}
