//! Configuration loader
//!
//! Settings are layered with Figment, later layers overriding earlier ones:
//!
//! 1. `AppConfig::default()`
//! 2. a TOML file: the explicit path, or `vessel.toml` in the working directory
//! 3. environment variables such as `VESSEL__CONTAINER__MAX_DEPTH=8`

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use vessel_domain::error::Result;

use crate::config::AppConfig;
use crate::constants::{CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_FILENAME};
use crate::error_ext::ErrorContext;
use crate::logging::log_config_file;

/// Loads [`AppConfig`] from defaults, a TOML file and the environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Loader reading `vessel.toml` and `VESSEL__*` variables
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Read this file instead of `vessel.toml`
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read `<PREFIX>__SECTION__KEY` variables instead of `VESSEL__...`
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Explicitly configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// The layered provider stack, for hosts that merge further providers
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(file) = self.config_file() {
            figment = figment.merge(Toml::file(file));
        }
        let prefix = format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix);
        figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR))
    }

    /// Extract and validate the configuration
    pub fn load(&self) -> Result<AppConfig> {
        let config: AppConfig = self
            .figment()
            .extract()
            .config_context("Failed to extract configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Write `config` as pretty TOML to `path`
    pub fn save_to<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let rendered =
            toml::to_string_pretty(config).context("Failed to serialize configuration")?;
        std::fs::write(path.as_ref(), rendered).context(format!(
            "Failed to write {}",
            path.as_ref().display()
        ))
    }

    fn config_file(&self) -> Option<PathBuf> {
        let path = self
            .config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME));
        let found = path.exists();
        if found || self.config_path.is_some() {
            log_config_file(&path, found);
        }
        found.then_some(path)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
