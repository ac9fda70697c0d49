//! Unit tests for composite analysis and assembly

use std::sync::Arc;
use vessel_domain::composite;
use vessel_domain::ports::{Composite, Field, FieldSet};
use vessel_domain::value_objects::{TypeKey, value_of};
use vessel_domain::Error;

trait Clock: Send + Sync {}

#[derive(Clone)]
struct Page {
    title: String,
    views: u64,
    clock: Arc<dyn Clock>,
}

composite!(Page {
    title: String,
    views: u64,
    clock: Arc<dyn Clock>,
});

#[derive(Clone)]
struct Empty;

composite!(Empty {});

struct SystemClock;
impl Clock for SystemClock {}

#[test]
fn test_fields_in_declaration_order() {
    let fields = Page::fields();
    let names: Vec<_> = fields.iter().map(|f| f.name).collect();
    assert_eq!(names, ["title", "views", "clock"]);
    assert_eq!(fields[1], Field::new::<u64>("views"));
    assert_eq!(fields[2].ty, TypeKey::capability::<dyn Clock>());
}

#[test]
fn test_assemble_from_field_set() {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let mut set = FieldSet::new("Page");
    set.insert("title", value_of("Home".to_string()));
    set.insert("views", value_of(3_u64));
    set.insert("clock", value_of(clock));
    assert_eq!(set.len(), 3);

    let page = Page::assemble(&mut set).unwrap();
    assert_eq!(page.title, "Home");
    assert_eq!(page.views, 3);
    assert!(set.is_empty());
    let _ = page.clock;
}

#[test]
fn test_assemble_missing_field() {
    let mut set = FieldSet::new("Page");
    set.insert("title", value_of("Home".to_string()));
    match Page::assemble(&mut set) {
        Err(Error::Resolution { target, .. }) => assert_eq!(target, "Page.views"),
        Err(other) => panic!("Expected Resolution error, got {other}"),
        Ok(_) => panic!("Expected Resolution error"),
    }
}

#[test]
fn test_assemble_mistyped_field() {
    let mut set = FieldSet::new("Page");
    set.insert("title", value_of(42_i32));
    match set.take::<String>("title") {
        Err(Error::TypeMismatch { target, expected }) => {
            assert_eq!(target, "Page.title");
            assert_eq!(expected, std::any::type_name::<String>());
        }
        other => panic!("Expected TypeMismatch error, got {other:?}"),
    }
}

#[test]
fn test_empty_composite() {
    assert!(Empty::fields().is_empty());
    let mut set = FieldSet::new("Empty");
    assert!(Empty::assemble(&mut set).is_ok());
}
