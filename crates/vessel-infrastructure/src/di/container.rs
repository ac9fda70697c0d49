//! Value container
//!
//! Name- and type-keyed registry of value generators. Lookups materialize a
//! fresh value on every call; nothing is cached.
//!
//! ## Concurrency
//!
//! Both tables are sharded concurrent maps. A lookup clones the generator's
//! `Arc` out of its table and releases the shard before producing, so
//! producers may re-enter the container.

use std::fmt;
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use tracing::{debug, trace, warn};
use vessel_domain::error::Result;
use vessel_domain::ports::{Composite, Factory};
use vessel_domain::value_objects::{Key, KeyCategory, TypeKey, Value, downcast};

use super::builder;
use super::classifier::classify;
use super::generator::ValueGenerator;
use super::provider::Provider;
use super::source::Source;
use super::stack::BuildStack;
use super::translator::translate;
use crate::config::ContainerConfig;

static GLOBAL: LazyLock<Container> = LazyLock::new(Container::new);

/// Registry mapping names and type identities to value generators
///
/// # Example
///
/// ```
/// use vessel_infrastructure::di::{Container, Source};
/// use vessel_domain::value_objects::Key;
///
/// let container = Container::new();
/// container.register(None, Source::instance(42_i32)).unwrap();
/// assert_eq!(container.get::<i32>(&Key::of::<i32>()), Some(42));
/// ```
pub struct Container {
    names: DashMap<String, Arc<ValueGenerator>>,
    types: DashMap<String, Arc<ValueGenerator>>,
    config: ContainerConfig,
}

impl Container {
    /// Create an empty container with default settings
    pub fn new() -> Self {
        Self::with_config(ContainerConfig::default())
    }

    /// Create an empty container with the given settings
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            names: DashMap::new(),
            types: DashMap::new(),
            config,
        }
    }

    /// Process-wide default container
    ///
    /// Callers that need isolation should construct their own container.
    pub fn global() -> &'static Container {
        &GLOBAL
    }

    /// Container settings
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// Register a generator
    ///
    /// With `key == None` the key is inferred from the source: the return
    /// type of a function, the type of an instance, or `Arc<T>` for a
    /// deferred composite. An existing generator under the same key is
    /// replaced.
    pub fn register(&self, key: Option<Key>, source: Source) -> Result<()> {
        let (generator, inferred) = classify(source)?;
        let category = key
            .as_ref()
            .map_or_else(|| KeyCategory::of_type(&inferred), translate);
        debug!(key = %category, kind = ?generator.kind(), "Registering generator");
        let replaced = self
            .table(&category)
            .insert(category.identity().to_string(), Arc::new(generator))
            .is_some();
        if replaced {
            debug!(key = %category, "Replaced existing generator");
        }
        Ok(())
    }

    /// Produce a value for `key`
    ///
    /// Returns `None` when nothing is registered or the producer fails; the
    /// failure is logged. Use [`try_lookup`](Self::try_lookup) to observe it.
    pub fn lookup(&self, key: &Key) -> Option<Value> {
        match self.try_lookup(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Producer failed to materialize a value");
                None
            }
        }
    }

    /// Produce a value for `key`, surfacing producer failures
    pub fn try_lookup(&self, key: &Key) -> Result<Option<Value>> {
        let category = translate(key);
        let generator = self
            .table(&category)
            .get(category.identity())
            .map(|entry| Arc::clone(entry.value()));
        match generator {
            Some(generator) => self.materialize(&generator).map(Some),
            None => {
                trace!(key = %category, "No generator registered");
                Ok(None)
            }
        }
    }

    /// Produce a value for `key` and clone it out as `T`
    pub fn get<T: Clone + 'static>(&self, key: &Key) -> Option<T> {
        self.lookup(key).and_then(|value| downcast(&value))
    }

    /// Produce a value from the type table by identity string
    pub fn lookup_by_type_name(&self, identity: &str) -> Option<Value> {
        let generator = self.type_generator(identity)?;
        match self.materialize(&generator) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, identity, "Producer failed to materialize a value");
                None
            }
        }
    }

    /// Find a provider for a field: by `name` first, then by `ty`
    pub fn contains(&self, name: &str, ty: &TypeKey) -> Option<Provider<'_>> {
        self.find(name, ty)
            .map(|generator| Provider::new(self, generator))
    }

    /// Remove the generator registered under `key`
    ///
    /// Returns whether a generator was removed.
    pub fn delete(&self, key: &Key) -> bool {
        let category = translate(key);
        let removed = self.table(&category).remove(category.identity()).is_some();
        debug!(key = %category, removed, "Deleting generator");
        removed
    }

    /// Auto-build a fresh `T` from registered field values
    ///
    /// Generators registered for `T` itself are not consulted.
    pub fn build<T: Composite>(&self) -> Result<T> {
        let mut stack = BuildStack::new(self.config.max_depth);
        builder::build::<T>(self, &mut stack)
    }

    /// Call `factory` with arguments resolved by type
    pub fn invoke<F, Args>(&self, factory: F) -> Result<F::Output>
    where
        F: Factory<Args>,
    {
        let mut stack = BuildStack::new(self.config.max_depth);
        let owner = std::any::type_name::<F>();
        let args = builder::resolve_arguments(self, owner, &factory.parameters(), &mut stack)?;
        factory.invoke(args)
    }

    /// Number of registered generators across both tables
    pub fn len(&self) -> usize {
        self.names.len() + self.types.len()
    }

    /// Whether no generator is registered
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.types.is_empty()
    }

    pub(crate) fn materialize(&self, generator: &ValueGenerator) -> Result<Value> {
        if self.config.trace_resolutions {
            debug!(tags = ?generator.tags(), kind = ?generator.kind(), "Materializing value");
        } else {
            trace!(tags = ?generator.tags(), kind = ?generator.kind(), "Materializing value");
        }
        let mut stack = BuildStack::new(self.config.max_depth);
        generator.generate(self, &mut stack)
    }

    pub(crate) fn find(&self, name: &str, ty: &TypeKey) -> Option<Arc<ValueGenerator>> {
        self.names
            .get(name)
            .or_else(|| self.types.get(ty.name()))
            .map(|entry| Arc::clone(entry.value()))
    }

    pub(crate) fn type_generator(&self, identity: &str) -> Option<Arc<ValueGenerator>> {
        self.types
            .get(identity)
            .map(|entry| Arc::clone(entry.value()))
    }

    fn table(&self, category: &KeyCategory) -> &DashMap<String, Arc<ValueGenerator>> {
        if category.is_name() {
            &self.names
        } else {
            &self.types
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("names", &self.names.len())
            .field("types", &self.types.len())
            .field("config", &self.config)
            .finish()
    }
}
