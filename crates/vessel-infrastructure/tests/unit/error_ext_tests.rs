//! Unit tests for error context extensions

use std::error::Error as _;
use std::io;

use vessel_domain::Error;
use vessel_infrastructure::error_ext::ErrorContext;

fn missing() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
}

#[test]
fn test_context_maps_to_infrastructure() {
    match missing().context("Failed to read state") {
        Err(err @ Error::Infrastructure { .. }) => {
            assert_eq!(
                err.to_string(),
                "Infrastructure error: Failed to read state: no such file"
            );
            assert!(err.source().is_some());
        }
        other => panic!("Expected infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_config_context_maps_to_configuration() {
    match missing().config_context("Failed to read vessel.toml") {
        Err(Error::Configuration { message, source }) => {
            assert_eq!(message, "Failed to read vessel.toml: no such file");
            assert!(source.is_some());
        }
        other => panic!("Expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_ok_passes_through() {
    let value: Result<u8, io::Error> = Ok(3);
    assert_eq!(value.context("unused").unwrap(), 3);
}

#[test]
fn test_producer_context_names_the_key() {
    match missing().producer_context("app::Store") {
        Err(Error::Producer { key, source }) => {
            assert_eq!(key, "app::Store");
            assert_eq!(source.to_string(), "no such file");
        }
        other => panic!("Expected producer error, got {other:?}"),
    }
}
