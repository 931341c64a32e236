use std::any::{Any, TypeId};

use indexmap::IndexMap;
use tracing::debug;

use super::{Environment, FeatureType, SOURCE_LEVEL};

/// Where a registry's values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Resolved against a live environment.
    Environment,
    /// Filled with each feature's test default.
    TestDefaults,
}

struct Entry {
    name: &'static str,
    display: String,
    value: Box<dyn Any + Send + Sync>,
}

/// Resolved feature values for a single generation run.
///
/// Built once, before any type is processed, and read-only afterwards. It may
/// be shared by reference between types processed in parallel.
pub struct FeatureRegistry {
    origin: Origin,
    entries: IndexMap<TypeId, Entry>,
}

impl FeatureRegistry {
    /// Start a registry that resolves features against `env`.
    pub fn builder(env: &dyn Environment) -> FeatureRegistryBuilder<'_> {
        FeatureRegistryBuilder::new(Source::Environment(env))
    }

    /// Start a registry that uses every feature's test default.
    pub fn test_defaults() -> FeatureRegistryBuilder<'static> {
        FeatureRegistryBuilder::new(Source::TestDefaults)
    }

    /// A registry with every built-in feature resolved against `env`.
    pub fn standard(env: &dyn Environment) -> Self {
        Self::builder(env).with(&SOURCE_LEVEL).build()
    }

    /// A registry with every built-in feature at its test default.
    pub fn standard_test_defaults() -> Self {
        Self::test_defaults().with(&SOURCE_LEVEL).build()
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Look up a resolved feature value.
    ///
    /// # Panics
    ///
    /// Panics if `feature` was not registered when the registry was built.
    /// Every feature a generator uses must be registered up front.
    pub fn get<F: FeatureType>(&self, feature: &F) -> &F::Value {
        match self.try_get(feature) {
            Some(value) => value,
            None => panic!(
                "feature '{}' was not registered before generation started",
                feature.name()
            ),
        }
    }

    /// Look up a resolved feature value, or `None` if it was never registered.
    pub fn try_get<F: FeatureType>(&self, _feature: &F) -> Option<&F::Value> {
        self.entries
            .get(&TypeId::of::<F>())
            .and_then(|entry| entry.value.downcast_ref::<F::Value>())
    }

    /// Registered features as `(name, value)` pairs, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .values()
            .map(|entry| (entry.name, entry.display.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for FeatureRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureRegistry")
            .field("origin", &self.origin)
            .field("features", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

enum Source<'a> {
    Environment(&'a dyn Environment),
    TestDefaults,
}

/// Builder for [`FeatureRegistry`].
pub struct FeatureRegistryBuilder<'a> {
    source: Source<'a>,
    entries: IndexMap<TypeId, Entry>,
}

impl<'a> FeatureRegistryBuilder<'a> {
    fn new(source: Source<'a>) -> Self {
        Self {
            source,
            entries: IndexMap::new(),
        }
    }

    /// Register a feature, resolving its value now.
    ///
    /// Registering the same feature twice keeps the first value; features
    /// are resolved at most once per run.
    pub fn with<F: FeatureType>(mut self, feature: &F) -> Self {
        let key = TypeId::of::<F>();
        if self.entries.contains_key(&key) {
            return self;
        }
        let value = match self.source {
            Source::Environment(env) => feature.resolve(env),
            Source::TestDefaults => feature.test_default(),
        };
        debug!(feature = feature.name(), %value, "resolved feature");
        self.entries.insert(
            key,
            Entry {
                name: feature.name(),
                display: value.to_string(),
                value: Box::new(value),
            },
        );
        self
    }

    pub fn build(self) -> FeatureRegistry {
        let origin = match self.source {
            Source::Environment(_) => Origin::Environment,
            Source::TestDefaults => Origin::TestDefaults,
        };
        FeatureRegistry {
            origin,
            entries: self.entries,
        }
    }
}
