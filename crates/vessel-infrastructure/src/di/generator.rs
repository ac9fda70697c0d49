//! Value generators
//!
//! A generator is the classified, immutable form of a registered source. The
//! producer variant is fixed at registration; materialization only dispatches
//! on it.

use std::fmt;
use std::sync::Arc;

use vessel_domain::error::Result;
use vessel_domain::value_objects::Value;

use super::builder::{self, CompositeType};
use super::source::{ErasedFactory, signature};
use super::stack::BuildStack;
use super::Container;

/// Producer shape of a registered generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    /// Factory called with injected arguments
    Function,
    /// Ready-made value handed out verbatim
    Instance,
    /// Composite built (or late-bound) on every call
    Deferred,
}

pub(crate) enum Producer {
    Function(Arc<dyn ErasedFactory>),
    Instance(Value),
    Deferred(CompositeType),
}

/// A named unit of value production
pub struct ValueGenerator {
    tags: Vec<String>,
    producer: Producer,
}

impl ValueGenerator {
    pub(crate) fn new(tags: Vec<String>, producer: Producer) -> Self {
        Self { tags, producer }
    }

    /// Descriptive strings recorded at registration
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Producer shape
    pub fn kind(&self) -> GeneratorKind {
        match self.producer {
            Producer::Function(_) => GeneratorKind::Function,
            Producer::Instance(_) => GeneratorKind::Instance,
            Producer::Deferred(_) => GeneratorKind::Deferred,
        }
    }

    pub(crate) fn generate(&self, container: &Container, stack: &mut BuildStack) -> Result<Value> {
        match &self.producer {
            Producer::Instance(value) => Ok(Arc::clone(value)),
            Producer::Function(factory) => {
                let output = factory.output();
                stack.enter(output.name())?;
                let result =
                    builder::resolve_arguments(container, output.name(), &factory.parameters(), stack)
                        .and_then(|args| factory.call(args));
                stack.leave();
                result
            }
            Producer::Deferred(composite) => builder::build_deferred(container, composite, stack),
        }
    }
}

impl fmt::Debug for ValueGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let producer = match &self.producer {
            Producer::Function(factory) => signature(factory.as_ref()),
            Producer::Instance(_) => "instance".to_string(),
            Producer::Deferred(composite) => format!("deferred {}", composite.target),
        };
        f.debug_struct("ValueGenerator")
            .field("tags", &self.tags)
            .field("producer", &producer)
            .finish()
    }
}
