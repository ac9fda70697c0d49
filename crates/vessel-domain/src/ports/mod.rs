//! Domain Port Interfaces
//!
//! Boundary contracts between the container and the code it builds:
//!
//! - **structure** - composite types and their field lists
//! - **factory** - callables whose parameters are injected
//! - **provider** - read-only generator view for field validators

/// Callable analysis and invocation
pub mod factory;
/// Generator view for field validators
pub mod provider;
/// Composite analysis and assembly
pub mod structure;

pub use factory::Factory;
pub use provider::ValueProvider;
pub use structure::{Composite, Field, FieldSet};
