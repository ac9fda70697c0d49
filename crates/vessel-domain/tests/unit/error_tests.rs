//! Unit tests for domain error types

use vessel_domain::Error;

#[test]
fn test_must_be_struct_pointer_error() {
    let error = Error::must_be_struct_pointer("nil");
    match &error {
        Error::MustBeStructPointer { described } => assert_eq!(described, "nil"),
        _ => panic!("Expected MustBeStructPointer error"),
    }
    assert!(error.to_string().contains("nil"));
}

#[test]
fn test_invalid_function_error() {
    let error = Error::invalid_function("fn() -> ()");
    match error {
        Error::InvalidFunction { signature } => assert_eq!(signature, "fn() -> ()"),
        _ => panic!("Expected InvalidFunction error"),
    }
}

#[test]
fn test_resolution_error_is_unresolved() {
    let error = Error::resolution("Handler.db", "Database");
    assert!(error.is_unresolved());
    let display = error.to_string();
    assert!(display.contains("Handler.db"));
    assert!(display.contains("Database"));
}

#[test]
fn test_cyclic_error_renders_path() {
    let error = Error::cyclic(vec!["A".to_string(), "B".to_string(), "A".to_string()]);
    assert_eq!(error.to_string(), "Cyclic dependency: A -> B -> A");
    assert!(!error.is_unresolved());
}

#[test]
fn test_producer_error_keeps_source() {
    let io = std::io::Error::other("disk full");
    let error = Error::producer("Store", io);
    assert!(std::error::Error::source(&error).is_some());
    assert!(error.to_string().contains("disk full"));
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("Missing required config");
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Missing required config");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
}
