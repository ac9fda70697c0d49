//! Structured logging with tracing
//!
//! Subscriber setup for hosts embedding the container. The container itself
//! only emits events: registrations and deletions at `debug`, resolution
//! steps at `trace`, and producer failures swallowed by `Option` lookups at
//! `warn`.

use std::path::Path;

use tracing::{Level, info, warn};
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};
use vessel_domain::error::{Error, Result};

pub use crate::config::LoggingConfig;
use crate::constants::{LOG_ENV_FILTER, LOG_FILE_PREFIX};
use crate::error_ext::ErrorContext;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber described by `config`
///
/// `VESSEL_LOG`, when set, replaces the configured level as the filter.
/// Installing twice fails with an infrastructure error.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::try_from_env(LOG_ENV_FILTER).unwrap_or_else(|_| level_filter(level));

    let mut layers = vec![output_layer(config.json_format, std::io::stdout, true)];
    if let Some(path) = &config.file_output {
        layers.push(output_layer(config.json_format, daily_file(path), false));
    }

    Registry::default()
        .with(layers)
        .with(filter)
        .try_init()
        .context("Failed to initialize logging")?;

    info!(%level, json = config.json_format, "Logging initialized");
    Ok(())
}

/// Filter enabling `level` and everything more severe, for every target
pub fn level_filter(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .parse_lossy("")
}

fn output_layer<W>(json: bool, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

fn daily_file(path: &Path) -> RollingFileAppender {
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_stem()
        .unwrap_or_else(|| std::ffi::OsStr::new(LOG_FILE_PREFIX));
    rolling::daily(directory, prefix)
}

/// Parse a level name; `warning` is accepted for `warn`
pub fn parse_log_level(level: &str) -> Result<Level> {
    let name = level.trim();
    let name = if name.eq_ignore_ascii_case("warning") {
        "warn"
    } else {
        name
    };
    name.parse::<Level>().map_err(|_| {
        Error::configuration(format!(
            "Invalid log level '{level}': expected trace, debug, info, warn or error"
        ))
    })
}

/// Report which configuration file, if any, fed the loaded settings
pub fn log_config_file(path: &Path, found: bool) {
    if found {
        info!(path = %path.display(), "Loaded configuration file");
    } else {
        warn!(path = %path.display(), "Configuration file not found, using defaults and environment");
    }
}
