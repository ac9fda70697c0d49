//! Type Identity Value Objects
//!
//! A [`TypeKey`] is the identity under which the container files type-keyed
//! generators. Two keys are equal when they describe the same Rust type; the
//! identity string reported by [`TypeKey::name`] is the key used by the
//! type table.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// How a type identity was declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A concrete, sized type
    Concrete,
    /// A capability (trait object) type, carried through its `Arc` handle
    Capability,
}

/// Value Object: Type Identity
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use vessel_domain::value_objects::TypeKey;
///
/// trait Clock: Send + Sync {}
///
/// let port = TypeKey::capability::<dyn Clock>();
/// assert!(port.is_capability());
/// assert_eq!(port, TypeKey::of::<Arc<dyn Clock>>());
/// ```
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
    kind: TypeKind,
}

impl TypeKey {
    /// Identity of a concrete type
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            kind: TypeKind::Concrete,
        }
    }

    /// Identity of a capability type `dyn Trait`
    ///
    /// Capabilities are shared as `Arc<dyn Trait>`, so the identity is the
    /// handle's. Fields and parameters declared as `Arc<dyn Trait>` therefore
    /// resolve against capability registrations.
    pub fn capability<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<Arc<T>>(),
            name: std::any::type_name::<Arc<T>>(),
            kind: TypeKind::Capability,
        }
    }

    /// Runtime type id
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Identity string used as the type table key
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declaration kind
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Whether this identity was declared as a capability
    pub fn is_capability(&self) -> bool {
        self.kind == TypeKind::Capability
    }

    /// Whether this is the identity of `()`
    pub fn is_unit(&self) -> bool {
        self.id == TypeId::of::<()>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeKey")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
