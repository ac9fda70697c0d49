//! Value Container - runtime dependency injection
//!
//! ## Architecture
//!
//! ```text
//! register(key, Source) ──► classifier ──► ValueGenerator ──► names / types
//!                                                                   │
//! lookup(Key) ──► translator ──► table ──► generate ◄───────────────┘
//!                                              │
//!                                   builder (fields / arguments)
//!                                              │
//!                                   contains(name, type) ──► …
//! ```
//!
//! - `source` - what callers register
//! - `classifier` - source to generator, default key
//! - `translator` - key to table and identity
//! - `builder` - recursive composite and argument resolution
//! - `container` - the registry itself

pub(crate) mod builder;
pub(crate) mod classifier;
pub mod container;
pub mod generator;
pub mod provider;
pub mod source;
pub(crate) mod stack;
pub mod translator;

pub use container::Container;
pub use generator::{GeneratorKind, ValueGenerator};
pub use provider::Provider;
pub use source::Source;
pub use translator::translate;
