//! Domain Value Objects
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TypeKey`] | Runtime identity of a concrete or capability type |
//! | [`Key`] | Explicit name-or-type key passed by callers |
//! | [`KeyCategory`] | Normalized key deciding the table consulted |
//! | [`Value`] | Opaque shared handle to a produced value |

/// Lookup keys and their categories
pub mod key;
/// Runtime type identities
pub mod type_key;
/// Produced value handles
pub mod value;

pub use key::{Key, KeyCategory};
pub use type_key::{TypeKey, TypeKind};
pub use value::{Value, downcast, value_of};
