//! Lookup Key Value Objects
//!
//! Callers address the container with an explicit [`Key`]: either a name or
//! a type identity. The translator turns a key into a [`KeyCategory`], which
//! decides the table that is consulted.

use std::fmt;

use super::TypeKey;

/// Registration and lookup key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Explicit textual identifier
    Name(String),
    /// Type identity (concrete or capability)
    Type(TypeKey),
}

impl Key {
    /// Key for an explicit name
    pub fn name<S: Into<String>>(name: S) -> Self {
        Self::Name(name.into())
    }

    /// Key for a concrete type
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::Type(TypeKey::of::<T>())
    }

    /// Key for a capability type `dyn Trait`
    pub fn capability<T: ?Sized + 'static>() -> Self {
        Self::Type(TypeKey::capability::<T>())
    }

    /// Key for the type of a given value
    pub fn of_val<T: 'static>(_value: &T) -> Self {
        Self::of::<T>()
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<TypeKey> for Key {
    fn from(ty: TypeKey) -> Self {
        Self::Type(ty)
    }
}

/// Normalized key category
///
/// `StringName` keys live in the name table, the two type categories share
/// the type table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyCategory {
    /// Non-empty explicit name
    StringName(String),
    /// Identity of a concrete type
    ConcreteType(&'static str),
    /// Identity of a capability type
    CapabilityType(&'static str),
}

impl KeyCategory {
    /// Category of a type identity
    pub fn of_type(ty: &TypeKey) -> Self {
        if ty.is_capability() {
            Self::CapabilityType(ty.name())
        } else {
            Self::ConcreteType(ty.name())
        }
    }

    /// Whether the key addresses the name table
    pub fn is_name(&self) -> bool {
        matches!(self, Self::StringName(_))
    }

    /// Table key
    pub fn identity(&self) -> &str {
        match self {
            Self::StringName(name) => name,
            Self::ConcreteType(name) | Self::CapabilityType(name) => name,
        }
    }
}

impl fmt::Display for KeyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StringName(name) => write!(f, "name:{name}"),
            Self::ConcreteType(name) => write!(f, "type:{name}"),
            Self::CapabilityType(name) => write!(f, "capability:{name}"),
        }
    }
}
