//! # Vessel Domain
//!
//! Types and boundary contracts shared by the value container.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error type and `Result` alias |
//! | [`value_objects`] | Type identities, lookup keys, produced values |
//! | [`ports`] | Structural analyzer and value provider contracts |
//! | [`constants`] | Domain constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Composite, Factory, Field, FieldSet, ValueProvider};
pub use value_objects::{Key, KeyCategory, TypeKey, TypeKind, Value};
