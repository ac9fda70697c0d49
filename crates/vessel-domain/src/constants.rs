//! Domain layer constants

/// Descriptive tag recorded for a `nil` source
pub const NIL_SOURCE: &str = "nil";

/// Maximum number of parameters a factory may declare
pub const FACTORY_MAX_PARAMETERS: usize = 8;
