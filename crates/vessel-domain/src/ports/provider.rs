//! Value Provider Port
//!
//! Exposed to field-level validators outside the container: a provider
//! yields both the descriptive strings recorded at registration and, on
//! demand, a freshly produced value.

use crate::value_objects::Value;

/// Read-only view of one registered generator
pub trait ValueProvider {
    /// Descriptive strings recorded at registration, in order
    fn descriptive_tags(&self) -> &[String];

    /// Produce a value; `None` when the producer could not materialize one
    fn materialize(&self) -> Option<Value>;
}
