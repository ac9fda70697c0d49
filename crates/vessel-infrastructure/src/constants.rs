//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `vessel_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "vessel.toml";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "VESSEL";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// CONTAINER CONSTANTS
// ============================================================================

/// Default bound on nested builds during one resolution
pub const DEFAULT_MAX_RESOLUTION_DEPTH: usize = 64;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_FILTER: &str = "VESSEL_LOG";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "vessel";
