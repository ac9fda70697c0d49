//! Generator classification
//!
//! Turns a [`Source`] into a [`ValueGenerator`] and the key it is filed
//! under when the caller gives none. Sources that cannot produce a value
//! are rejected here, before anything reaches the tables.

use vessel_domain::constants::NIL_SOURCE;
use vessel_domain::error::{Error, Result};
use vessel_domain::value_objects::TypeKey;

use super::generator::{Producer, ValueGenerator};
use super::source::{Source, SourceKind, signature};

/// Classify `source`, returning its generator and default key
///
/// - functions are keyed by their return type and must return a value;
/// - instances are keyed by their own type;
/// - deferred composites are keyed by their handle type `Arc<T>`;
/// - absences are rejected: capability tokens with `InvalidGenerator`,
///   everything else with `MustBeStructPointer`.
pub(crate) fn classify(source: Source) -> Result<(ValueGenerator, TypeKey)> {
    let Source { kind, tags } = source;
    let (default_tags, producer, key) = match kind {
        SourceKind::Nil => return Err(Error::must_be_struct_pointer(NIL_SOURCE)),
        SourceKind::Absent(ty) if ty.is_capability() => {
            return Err(Error::invalid_generator(ty.name()));
        }
        SourceKind::Absent(ty) => return Err(Error::must_be_struct_pointer(ty.name())),
        SourceKind::Function(factory) => {
            let output = factory.output();
            if output.is_unit() {
                return Err(Error::invalid_function(signature(factory.as_ref())));
            }
            (
                vec![output.name().to_string()],
                Producer::Function(factory),
                output,
            )
        }
        SourceKind::Instance { value, ty, tags } => (tags, Producer::Instance(value), ty),
        SourceKind::Composite(composite) => (
            vec![composite.handle.name().to_string()],
            Producer::Deferred(composite),
            composite.handle,
        ),
    };
    Ok((ValueGenerator::new(tags.unwrap_or(default_tags), producer), key))
}
