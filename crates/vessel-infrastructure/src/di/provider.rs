//! Value provider handed to field validators

use std::fmt;
use std::sync::Arc;

use tracing::warn;
use vessel_domain::error::Result;
use vessel_domain::ports::ValueProvider;
use vessel_domain::value_objects::Value;

use super::Container;
use super::generator::{GeneratorKind, ValueGenerator};

/// Read-only view of a generator found by [`Container::contains`]
pub struct Provider<'a> {
    container: &'a Container,
    generator: Arc<ValueGenerator>,
}

impl<'a> Provider<'a> {
    pub(crate) fn new(container: &'a Container, generator: Arc<ValueGenerator>) -> Self {
        Self {
            container,
            generator,
        }
    }

    /// Producer shape of the underlying generator
    pub fn kind(&self) -> GeneratorKind {
        self.generator.kind()
    }

    /// Produce a value, surfacing producer failures
    pub fn try_materialize(&self) -> Result<Value> {
        self.container.materialize(&self.generator)
    }
}

impl ValueProvider for Provider<'_> {
    fn descriptive_tags(&self) -> &[String] {
        self.generator.tags()
    }

    fn materialize(&self) -> Option<Value> {
        match self.try_materialize() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, "Provider failed to materialize a value");
                None
            }
        }
    }
}

impl fmt::Debug for Provider<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("generator", &self.generator)
            .finish()
    }
}
