//! Structural Analyzer Ports
//!
//! The container builds composite values without knowing their types. A
//! composite reports its fields through [`Composite::fields`] and is
//! assembled from the resolved values through [`Composite::assemble`].
//! The [`composite!`](crate::composite) macro implements both for a plain
//! struct.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::value_objects::{TypeKey, Value};

/// A named field of a composite type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Field name, used for name-first resolution
    pub name: &'static str,
    /// Declared field type
    pub ty: TypeKey,
}

impl Field {
    /// Describe a field of type `T`
    pub fn new<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            name,
            ty: TypeKey::of::<T>(),
        }
    }
}

/// A record-like type the container can auto-build
///
/// # Example
///
/// ```
/// use vessel_domain::composite;
/// use vessel_domain::ports::Composite;
///
/// #[derive(Clone)]
/// struct Greeting {
///     salutation: String,
///     repeat: u32,
/// }
///
/// composite!(Greeting { salutation: String, repeat: u32 });
///
/// let names: Vec<_> = Greeting::fields().iter().map(|f| f.name).collect();
/// assert_eq!(names, ["salutation", "repeat"]);
/// ```
pub trait Composite: Clone + Send + Sync + 'static {
    /// Fields in declaration order
    fn fields() -> Vec<Field>;

    /// Build an instance from resolved field values
    fn assemble(fields: &mut FieldSet) -> Result<Self>;
}

/// Resolved field values for one composite build
#[derive(Debug)]
pub struct FieldSet {
    owner: &'static str,
    values: HashMap<&'static str, Value>,
}

impl FieldSet {
    /// Empty set for the composite `owner`
    pub fn new(owner: &'static str) -> Self {
        Self {
            owner,
            values: HashMap::new(),
        }
    }

    /// Type identity of the composite being assembled
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    /// Record the resolved value of a field
    pub fn insert(&mut self, name: &'static str, value: Value) {
        self.values.insert(name, value);
    }

    /// Number of resolved fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no field has been resolved
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove a field value and clone it out as `F`
    pub fn take<F: Clone + 'static>(&mut self, name: &'static str) -> Result<F> {
        let target = format!("{}.{name}", self.owner);
        let value = self
            .values
            .remove(name)
            .ok_or_else(|| Error::resolution(&target, name))?;
        value
            .downcast_ref::<F>()
            .cloned()
            .ok_or_else(|| Error::type_mismatch(target, std::any::type_name::<F>()))
    }
}

/// Implement [`Composite`] for a struct from its field list
///
/// Every listed field must be `Clone + Send + Sync + 'static`. Capability
/// fields are declared through their handle, e.g. `clock: Arc<dyn Clock>`.
#[macro_export]
macro_rules! composite {
    ($owner:ty { $($field:ident : $fty:ty),* $(,)? }) => {
        impl $crate::ports::Composite for $owner {
            fn fields() -> ::std::vec::Vec<$crate::ports::Field> {
                ::std::vec![$($crate::ports::Field::new::<$fty>(stringify!($field))),*]
            }

            fn assemble(
                fields: &mut $crate::ports::FieldSet,
            ) -> $crate::error::Result<Self> {
                let _ = &fields;
                ::std::result::Result::Ok(Self {
                    $($field: fields.take::<$fty>(stringify!($field))?),*
                })
            }
        }
    };
}
