//! Composite auto-builder
//!
//! Builds composite values field by field and resolves factory arguments
//! parameter by parameter. Fields resolve name first, then by type;
//! parameters resolve by type only. Any unresolved field or parameter aborts
//! the whole build, so a partial instance is never observable.

use std::sync::Arc;

use tracing::trace;
use vessel_domain::error::{Error, Result};
use vessel_domain::ports::{Composite, Field, FieldSet};
use vessel_domain::value_objects::{TypeKey, Value, value_of};

use super::Container;
use super::stack::BuildStack;

/// Type-erased description of a composite `T`
#[derive(Clone, Copy)]
pub(crate) struct CompositeType {
    /// Identity of `T`
    pub(crate) target: TypeKey,
    /// Identity of the produced handle `Arc<T>`
    pub(crate) handle: TypeKey,
    fields: fn() -> Vec<Field>,
    assemble: fn(&mut FieldSet) -> Result<Value>,
    wrap: fn(&Value) -> Option<Value>,
}

impl CompositeType {
    pub(crate) fn of<T: Composite>() -> Self {
        Self {
            target: TypeKey::of::<T>(),
            handle: TypeKey::of::<Arc<T>>(),
            fields: T::fields,
            assemble: |fields| T::assemble(fields).map(|built| value_of(Arc::new(built))),
            wrap: |value| {
                value
                    .downcast_ref::<T>()
                    .map(|inner| value_of(Arc::new(inner.clone())))
                    .or_else(|| {
                        value
                            .downcast_ref::<Arc<T>>()
                            .map(|handle| value_of(Arc::clone(handle)))
                    })
            },
        }
    }
}

/// Materialize a deferred composite
///
/// A generator registered for `T` itself (by the name or type of `T`) takes
/// precedence over auto-building; its value is wrapped into the handle.
/// The build stack records the handle `Arc<T>`, so a late-bound function
/// producing `T` is not mistaken for a cycle.
pub(crate) fn build_deferred(
    container: &Container,
    composite: &CompositeType,
    stack: &mut BuildStack,
) -> Result<Value> {
    let target = composite.target;
    stack.enter(composite.handle.name())?;
    let result = match container.find(target.name(), &target) {
        Some(generator) => {
            trace!(composite = target.name(), "Late-bound generator found");
            generator.generate(container, stack).and_then(|value| {
                (composite.wrap)(&value)
                    .ok_or_else(|| Error::type_mismatch(composite.handle.name(), target.name()))
            })
        }
        None => resolve_fields(container, target.name(), (composite.fields)(), stack)
            .and_then(|mut fields| (composite.assemble)(&mut fields)),
    };
    stack.leave();
    result
}

/// Auto-build a fresh `T`, ignoring any generator registered for `T`
pub(crate) fn build<T: Composite>(container: &Container, stack: &mut BuildStack) -> Result<T> {
    let target = TypeKey::of::<T>();
    stack.enter(target.name())?;
    let result = resolve_fields(container, target.name(), T::fields(), stack)
        .and_then(|mut fields| T::assemble(&mut fields));
    stack.leave();
    result
}

/// Resolve every field of `owner`, in declaration order
pub(crate) fn resolve_fields(
    container: &Container,
    owner: &'static str,
    fields: Vec<Field>,
    stack: &mut BuildStack,
) -> Result<FieldSet> {
    let mut set = FieldSet::new(owner);
    for field in fields {
        let generator = container
            .find(field.name, &field.ty)
            .ok_or_else(|| Error::resolution(format!("{owner}.{}", field.name), field.ty.name()))?;
        trace!(owner, field = field.name, ty = field.ty.name(), "Resolving field");
        let value = generator.generate(container, stack)?;
        set.insert(field.name, value);
    }
    Ok(set)
}

/// Resolve one argument per declared parameter, by type identity
pub(crate) fn resolve_arguments(
    container: &Container,
    owner: &str,
    parameters: &[TypeKey],
    stack: &mut BuildStack,
) -> Result<Vec<Value>> {
    parameters
        .iter()
        .enumerate()
        .map(|(position, parameter)| {
            let generator = container.type_generator(parameter.name()).ok_or_else(|| {
                Error::resolution(format!("{owner} argument #{position}"), parameter.name())
            })?;
            generator.generate(container, stack)
        })
        .collect()
}
