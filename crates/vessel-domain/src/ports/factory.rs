//! Callable Analyzer Ports
//!
//! [`Factory`] is implemented for every `Fn(A1, .., An) -> R` with up to
//! eight parameters. It reports the declared parameter types and invokes the
//! callable with values resolved by the container.

use crate::error::{Error, Result};
use crate::value_objects::{TypeKey, Value};

/// A callable whose parameters can be injected
///
/// `Args` is the tuple of parameter types; it only disambiguates the
/// implementations for different arities.
pub trait Factory<Args>: Send + Sync + 'static {
    /// The single declared return type
    type Output: Send + Sync + 'static;

    /// Declared parameter types in order
    fn parameters(&self) -> Vec<TypeKey>;

    /// Call with resolved arguments, one per declared parameter
    fn invoke(&self, args: Vec<Value>) -> Result<Self::Output>;
}

fn argument<A: Clone + 'static>(
    args: &mut std::vec::IntoIter<Value>,
    position: usize,
) -> Result<A> {
    let target = format!("argument #{position}");
    let value = args
        .next()
        .ok_or_else(|| Error::resolution(&target, std::any::type_name::<A>()))?;
    value
        .downcast_ref::<A>()
        .cloned()
        .ok_or_else(|| Error::type_mismatch(target, std::any::type_name::<A>()))
}

macro_rules! impl_factory {
    ($($arg:ident),*) => {
        impl<Func, R, $($arg,)*> Factory<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> R + Send + Sync + 'static,
            R: Send + Sync + 'static,
            $($arg: Clone + Send + Sync + 'static,)*
        {
            type Output = R;

            fn parameters(&self) -> Vec<TypeKey> {
                vec![$(TypeKey::of::<$arg>()),*]
            }

            #[allow(non_snake_case, unused_mut, unused_variables, unused_assignments)]
            fn invoke(&self, args: Vec<Value>) -> Result<R> {
                let mut args = args.into_iter();
                let mut position = 0usize;
                $(
                    let $arg = argument::<$arg>(&mut args, position)?;
                    position += 1;
                )*
                Ok(self($($arg),*))
            }
        }
    };
}

impl_factory!();
impl_factory!(A1);
impl_factory!(A1, A2);
impl_factory!(A1, A2, A3);
impl_factory!(A1, A2, A3, A4);
impl_factory!(A1, A2, A3, A4, A5);
impl_factory!(A1, A2, A3, A4, A5, A6);
impl_factory!(A1, A2, A3, A4, A5, A6, A7);
impl_factory!(A1, A2, A3, A4, A5, A6, A7, A8);
