//! # Vessel
//!
//! A runtime value container: register producers by name or by type, then
//! resolve values, auto-build composite structs field by field, or call
//! factories with injected arguments.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use vessel::{Container, Key, Source, composite};
//!
//! #[derive(Clone)]
//! struct Database {
//!     url: String,
//! }
//!
//! #[derive(Clone)]
//! struct Handler {
//!     db: Arc<Database>,
//!     greeting: String,
//! }
//!
//! composite!(Database { url: String });
//! composite!(Handler { db: Arc<Database>, greeting: String });
//!
//! let container = Container::new();
//! container.register(Some(Key::name("url")), Source::instance("postgres://localhost".to_string())).unwrap();
//! container.register(Some(Key::name("greeting")), Source::instance("hello".to_string())).unwrap();
//! container.register(None, Source::composite::<Database>()).unwrap();
//!
//! let handler: Handler = container.build().unwrap();
//! assert_eq!(handler.db.url, "postgres://localhost");
//! assert_eq!(handler.greeting, "hello");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - identities, keys, errors and structural ports
//! - `infrastructure` - the container, configuration and logging

/// Domain layer - identities, keys and structural ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use vessel_domain::*;
}

/// Infrastructure layer - container, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use vessel_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use vessel_domain::composite;
pub use vessel_domain::{
    Composite, Error, Factory, Field, FieldSet, Key, KeyCategory, Result, TypeKey, Value,
    ValueProvider,
};
pub use vessel_infrastructure::di::{Container, GeneratorKind, Provider, Source, translate};
