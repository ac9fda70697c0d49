//! Generator sources
//!
//! A [`Source`] is what callers hand to [`Container::register`](super::Container::register).
//! Each constructor states the producer shape explicitly; the classifier
//! turns it into a generator once, at registration time.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use vessel_domain::error::Result;
use vessel_domain::ports::{Composite, Factory};
use vessel_domain::value_objects::{TypeKey, Value, value_of};

use super::builder::CompositeType;
use crate::error_ext::ErrorContext;

/// Object-safe view of a [`Factory`]
pub(crate) trait ErasedFactory: Send + Sync {
    /// Declared parameter types
    fn parameters(&self) -> Vec<TypeKey>;

    /// Type of the produced value
    fn output(&self) -> TypeKey;

    /// Invoke with resolved arguments
    fn call(&self, args: Vec<Value>) -> Result<Value>;
}

struct Infallible<F, Args> {
    factory: F,
    _args: PhantomData<fn() -> Args>,
}

impl<F, Args> ErasedFactory for Infallible<F, Args>
where
    F: Factory<Args>,
    Args: 'static,
{
    fn parameters(&self) -> Vec<TypeKey> {
        self.factory.parameters()
    }

    fn output(&self) -> TypeKey {
        TypeKey::of::<F::Output>()
    }

    fn call(&self, args: Vec<Value>) -> Result<Value> {
        self.factory.invoke(args).map(value_of)
    }
}

struct Fallible<F, Args, T, E> {
    factory: F,
    _marker: PhantomData<fn() -> (Args, T, E)>,
}

impl<F, Args, T, E> ErasedFactory for Fallible<F, Args, T, E>
where
    F: Factory<Args, Output = std::result::Result<T, E>>,
    Args: 'static,
    T: Send + Sync + 'static,
    E: std::error::Error + Send + Sync + 'static,
{
    fn parameters(&self) -> Vec<TypeKey> {
        self.factory.parameters()
    }

    fn output(&self) -> TypeKey {
        TypeKey::of::<T>()
    }

    fn call(&self, args: Vec<Value>) -> Result<Value> {
        self.factory
            .invoke(args)?
            .map(value_of)
            .producer_context(std::any::type_name::<T>())
    }
}

/// Render `fn(A, B) -> R` for diagnostics
pub(crate) fn signature(factory: &dyn ErasedFactory) -> String {
    let params: Vec<&str> = factory.parameters().iter().map(TypeKey::name).collect();
    format!("fn({}) -> {}", params.join(", "), factory.output().name())
}

pub(crate) enum SourceKind {
    Nil,
    Absent(TypeKey),
    Instance {
        value: Value,
        ty: TypeKey,
        tags: Vec<String>,
    },
    Function(Arc<dyn ErasedFactory>),
    Composite(CompositeType),
}

/// Something the container can turn into a value generator
pub struct Source {
    pub(crate) kind: SourceKind,
    pub(crate) tags: Option<Vec<String>>,
}

impl Source {
    fn new(kind: SourceKind) -> Self {
        Self { kind, tags: None }
    }

    /// No source at all; rejected at registration
    pub fn nil() -> Self {
        Self::new(SourceKind::Nil)
    }

    /// A ready-made value, handed out on every lookup
    ///
    /// The default descriptive tag is the type name, not the printed value.
    /// Validators that read the value's text need [`Source::displayed`] or
    /// explicit tags via [`Source::tagged`].
    pub fn instance<T: Send + Sync + 'static>(value: T) -> Self {
        let ty = TypeKey::of::<T>();
        Self::new(SourceKind::Instance {
            value: value_of(value),
            ty,
            tags: vec![ty.name().to_string()],
        })
    }

    /// A ready-made value described by its printed form
    pub fn displayed<T: fmt::Display + Send + Sync + 'static>(value: T) -> Self {
        let tags = vec![value.to_string()];
        Self::new(SourceKind::Instance {
            value: value_of(value),
            ty: TypeKey::of::<T>(),
            tags,
        })
    }

    /// A shared implementation of the capability `dyn Trait`
    pub fn capability<T: ?Sized + Send + Sync + 'static>(handle: Arc<T>) -> Self {
        let ty = TypeKey::capability::<T>();
        Self::new(SourceKind::Instance {
            value: value_of(handle),
            ty,
            tags: vec![ty.name().to_string()],
        })
    }

    /// A factory invoked on every lookup with injected arguments
    pub fn function<F, Args>(factory: F) -> Self
    where
        F: Factory<Args>,
        Args: 'static,
    {
        Self::new(SourceKind::Function(Arc::new(Infallible {
            factory,
            _args: PhantomData,
        })))
    }

    /// A factory that may fail; an `Err` is reported as a producer failure
    pub fn try_function<F, Args, T, E>(factory: F) -> Self
    where
        F: Factory<Args, Output = std::result::Result<T, E>>,
        Args: 'static,
        T: Send + Sync + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::new(SourceKind::Function(Arc::new(Fallible {
            factory,
            _marker: PhantomData,
        })))
    }

    /// Auto-build `T` on every lookup, produced as `Arc<T>`
    pub fn composite<T: Composite>() -> Self {
        Self::new(SourceKind::Composite(CompositeType::of::<T>()))
    }

    /// An optional value; `None` is a typed absence
    pub fn from_option<T: Send + Sync + 'static>(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::instance(value),
            None => Self::absent::<T>(),
        }
    }

    /// A typed absence of a concrete type
    pub fn absent<T: ?Sized + 'static>() -> Self {
        Self::new(SourceKind::Absent(TypeKey::of::<T>()))
    }

    /// A typed absence of the capability `dyn Trait`
    pub fn absent_capability<T: ?Sized + 'static>() -> Self {
        Self::new(SourceKind::Absent(TypeKey::capability::<T>()))
    }

    /// Replace the descriptive tags recorded for this source
    pub fn tagged<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            SourceKind::Nil => "nil".to_string(),
            SourceKind::Absent(ty) => format!("absent {ty}"),
            SourceKind::Instance { ty, .. } => format!("instance {ty}"),
            SourceKind::Function(factory) => signature(factory.as_ref()),
            SourceKind::Composite(composite) => format!("composite {}", composite.target),
        };
        f.debug_struct("Source")
            .field("kind", &kind)
            .field("tags", &self.tags)
            .finish()
    }
}
