//! Error context for foreign failures
//!
//! Converts errors raised around the container (files, TOML, Figment,
//! subscriber setup, user factories) into the domain [`Error`], keeping the
//! foreign error as the source.

use std::fmt;
use vessel_domain::error::{Error, Result};

/// Attach container context to a foreign `Result`
///
/// # Example
///
/// ```
/// use vessel_domain::Error;
/// use vessel_infrastructure::error_ext::ErrorContext;
///
/// let parsed: Result<u16, _> = "eighty".parse::<u16>();
/// let err = parsed.config_context("container.max_depth").unwrap_err();
/// assert!(matches!(err, Error::Configuration { .. }));
/// ```
pub trait ErrorContext<T> {
    /// Failure of the surrounding machinery, reported as `Infrastructure`
    fn context<C: fmt::Display>(self, context: C) -> Result<T>;

    /// Failure while reading or validating settings, reported as `Configuration`
    fn config_context<C: fmt::Display>(self, context: C) -> Result<T>;

    /// Failure returned by a factory producing `key`, reported as `Producer`
    fn producer_context(self, key: &str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C: fmt::Display>(self, context: C) -> Result<T> {
        self.map_err(|err| Error::Infrastructure {
            message: describe(&context, &err),
            source: Some(Box::new(err)),
        })
    }

    fn config_context<C: fmt::Display>(self, context: C) -> Result<T> {
        self.map_err(|err| Error::configuration_with_source(describe(&context, &err), err))
    }

    fn producer_context(self, key: &str) -> Result<T> {
        self.map_err(|err| Error::producer(key, err))
    }
}

fn describe(context: &dyn fmt::Display, err: &dyn std::error::Error) -> String {
    format!("{context}: {err}")
}
