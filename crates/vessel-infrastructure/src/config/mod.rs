//! Configuration
//!
//! Layered configuration (defaults, TOML file, environment) loaded with Figment.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, ContainerConfig, LoggingConfig};
