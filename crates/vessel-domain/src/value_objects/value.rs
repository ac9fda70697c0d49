//! Opaque produced values

use std::any::Any;
use std::sync::Arc;

/// A value handed out by the container
///
/// Instance generators hand out clones of the same `Arc`, so two lookups of
/// an instance observe the same allocation.
pub type Value = Arc<dyn Any + Send + Sync>;

/// Wrap a value for storage in the container
pub fn value_of<T: Send + Sync + 'static>(value: T) -> Value {
    Arc::new(value)
}

/// Clone the concrete `T` out of a value, if it holds one
pub fn downcast<T: Clone + 'static>(value: &Value) -> Option<T> {
    value.downcast_ref::<T>().cloned()
}
