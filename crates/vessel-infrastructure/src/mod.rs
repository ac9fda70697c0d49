//! # Vessel Infrastructure
//!
//! The value container and the technical concerns around it.
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Value container, generator classification, composite auto-builder |
//! | [`config`] | TOML / environment configuration via Figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader, ContainerConfig, LoggingConfig};
pub use di::{Container, Provider, Source};
pub use error_ext::ErrorContext;
