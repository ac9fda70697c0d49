//! Name/type key translation
//!
//! The single rule deciding which table a key addresses. Registration,
//! lookup and deletion all go through [`translate`].

use vessel_domain::value_objects::{Key, KeyCategory};

/// Normalize a key into its category and table identity
///
/// A non-empty name addresses the name table. An empty name is not a name:
/// it is keyed by its type, `String`. Type keys keep their concrete or
/// capability category.
pub fn translate(key: &Key) -> KeyCategory {
    match key {
        Key::Name(name) if !name.is_empty() => KeyCategory::StringName(name.clone()),
        Key::Name(_) => KeyCategory::ConcreteType(std::any::type_name::<String>()),
        Key::Type(ty) => KeyCategory::of_type(ty),
    }
}
