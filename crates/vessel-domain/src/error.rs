//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Vessel container
#[derive(Error, Debug)]
pub enum Error {
    /// A registered source was a typed absence that does not name a composite type
    #[error("Generator must be a composite handle: {described}")]
    MustBeStructPointer {
        /// Type (or `nil`) that was handed in as the source
        described: String,
    },

    /// A registered source was an absence token typed at a capability
    #[error("Invalid generator: {described}")]
    InvalidGenerator {
        /// Capability type that was handed in as the source
        described: String,
    },

    /// A factory does not declare exactly one return value
    #[error("Invalid function: a generator function must return exactly one value ({signature})")]
    InvalidFunction {
        /// Rendered factory signature
        signature: String,
    },

    /// A field or parameter has no matching registration
    #[error("Cannot resolve {target}: no generator registered for {key}")]
    Resolution {
        /// Field or parameter being resolved (e.g. `Handler.db`)
        target: String,
        /// Name or type identity that was looked up
        key: String,
    },

    /// A type reappeared while it was still under construction
    #[error("Cyclic dependency: {}", .path.join(" -> "))]
    CyclicDependency {
        /// Type identities from the outermost build to the repeated one
        path: Vec<String>,
    },

    /// The build stack grew past the configured limit
    #[error("Resolution depth {limit} exceeded while building {target}")]
    DepthExceeded {
        /// Configured maximum depth
        limit: usize,
        /// Type identity that would have exceeded the limit
        target: String,
    },

    /// A produced value does not have the type its consumer declared
    #[error("Type mismatch for {target}: expected {expected}")]
    TypeMismatch {
        /// Field, parameter or key receiving the value
        target: String,
        /// Declared type identity
        expected: String,
    },

    /// A fallible factory returned an error
    #[error("Producer for {key} failed: {source}")]
    Producer {
        /// Type identity the factory produces
        key: String,
        /// Error returned by the factory
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Registration error creation methods
impl Error {
    /// Create a must-be-composite error
    pub fn must_be_struct_pointer<S: Into<String>>(described: S) -> Self {
        Self::MustBeStructPointer {
            described: described.into(),
        }
    }

    /// Create an invalid generator error
    pub fn invalid_generator<S: Into<String>>(described: S) -> Self {
        Self::InvalidGenerator {
            described: described.into(),
        }
    }

    /// Create an invalid function error
    pub fn invalid_function<S: Into<String>>(signature: S) -> Self {
        Self::InvalidFunction {
            signature: signature.into(),
        }
    }
}

// Resolution error creation methods
impl Error {
    /// Create a resolution failure for a field or parameter
    pub fn resolution<T: Into<String>, K: Into<String>>(target: T, key: K) -> Self {
        Self::Resolution {
            target: target.into(),
            key: key.into(),
        }
    }

    /// Create a cyclic dependency error
    pub fn cyclic(path: Vec<String>) -> Self {
        Self::CyclicDependency { path }
    }

    /// Create a depth exceeded error
    pub fn depth_exceeded<S: Into<String>>(limit: usize, target: S) -> Self {
        Self::DepthExceeded {
            limit,
            target: target.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<T: Into<String>, E: Into<String>>(target: T, expected: E) -> Self {
        Self::TypeMismatch {
            target: target.into(),
            expected: expected.into(),
        }
    }

    /// Create a producer failure from a factory error
    pub fn producer<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        key: S,
        source: E,
    ) -> Self {
        Self::Producer {
            key: key.into(),
            source: Box::new(source),
        }
    }
}

// Configuration and infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}

impl Error {
    /// Whether this error reports a missing registration rather than a broken one
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Resolution { .. })
    }
}
