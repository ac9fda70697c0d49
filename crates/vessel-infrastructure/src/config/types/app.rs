//! Root configuration

use serde::{Deserialize, Serialize};
use vessel_domain::error::{Error, Result};

pub use super::container::ContainerConfig;
pub use super::logging::LoggingConfig;
use crate::logging::parse_log_level;

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Value container settings
    #[serde(default)]
    pub container: ContainerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reject settings the container cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.container.max_depth == 0 {
            return Err(Error::configuration(
                "container.max_depth must be greater than zero",
            ));
        }
        parse_log_level(&self.logging.level).map(drop)
    }
}
