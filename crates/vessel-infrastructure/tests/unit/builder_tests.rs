//! Unit tests for the composite auto-builder

use std::sync::Arc;

use vessel_domain::Error;
use vessel_domain::composite;
use vessel_domain::value_objects::Key;
use vessel_infrastructure::config::ContainerConfig;
use vessel_infrastructure::di::{Container, Source};

#[derive(Clone, Debug, PartialEq)]
struct Database {
    url: String,
}

composite!(Database { url: String });

#[derive(Clone)]
struct Handler {
    db: Arc<Database>,
    title: String,
    subtitle: String,
}

composite!(Handler {
    db: Arc<Database>,
    title: String,
    subtitle: String,
});

#[derive(Clone)]
struct Left {
    right: Arc<Right>,
}

#[derive(Clone)]
struct Right {
    left: Arc<Left>,
}

composite!(Left { right: Arc<Right> });
composite!(Right { left: Arc<Left> });

fn with_strings() -> Container {
    let container = Container::new();
    container
        .register(None, Source::instance("default".to_string()))
        .unwrap();
    container
        .register(
            Some(Key::name("url")),
            Source::instance("postgres://db".to_string()),
        )
        .unwrap();
    container
}

#[test]
fn test_build_resolves_every_field() {
    let container = with_strings();
    container
        .register(None, Source::composite::<Database>())
        .unwrap();
    container
        .register(Some(Key::name("title")), Source::instance("Home".to_string()))
        .unwrap();

    let handler: Handler = container.build().unwrap();
    assert_eq!(handler.db.url, "postgres://db");
    // Same-typed fields receive different values by name
    assert_eq!(handler.title, "Home");
    assert_eq!(handler.subtitle, "default");
}

#[test]
fn test_deferred_lookup_builds_fresh_handle() {
    let container = with_strings();
    container
        .register(None, Source::composite::<Database>())
        .unwrap();

    let key = Key::of::<Arc<Database>>();
    let first = container.get::<Arc<Database>>(&key).unwrap();
    let second = container.get::<Arc<Database>>(&key).unwrap();
    assert_eq!(first.url, "postgres://db");
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_deferred_late_binding_by_type() {
    let container = with_strings();
    container
        .register(None, Source::composite::<Database>())
        .unwrap();
    let key = Key::of::<Arc<Database>>();
    assert_eq!(
        container.get::<Arc<Database>>(&key).unwrap().url,
        "postgres://db"
    );

    container
        .register(
            None,
            Source::instance(Database {
                url: "sqlite::memory:".to_string(),
            }),
        )
        .unwrap();

    assert_eq!(
        container.get::<Arc<Database>>(&key).unwrap().url,
        "sqlite::memory:"
    );
}

#[test]
fn test_deferred_late_binding_to_function_by_type() {
    let container = with_strings();
    container
        .register(None, Source::composite::<Database>())
        .unwrap();
    container
        .register(
            None,
            Source::function(|| Database {
                url: "from factory".to_string(),
            }),
        )
        .unwrap();

    let db = container
        .try_lookup(&Key::of::<Arc<Database>>())
        .unwrap()
        .and_then(|value| value.downcast_ref::<Arc<Database>>().cloned())
        .unwrap();
    assert_eq!(db.url, "from factory");
}

#[test]
fn test_late_bound_function_may_depend_on_fields() {
    let container = with_strings();
    container
        .register(None, Source::composite::<Database>())
        .unwrap();
    container
        .register(
            None,
            Source::function(|url: String| Database {
                url: format!("{url}?pool=4"),
            }),
        )
        .unwrap();

    let db = container
        .get::<Arc<Database>>(&Key::of::<Arc<Database>>())
        .unwrap();
    assert_eq!(db.url, "default?pool=4");
}

#[test]
fn test_deferred_late_binding_by_type_name() {
    let container = Container::new();
    container
        .register(None, Source::composite::<Database>())
        .unwrap();
    container
        .register(
            Some(Key::name(std::any::type_name::<Database>())),
            Source::function(|| Database {
                url: "named".to_string(),
            }),
        )
        .unwrap();

    let db = container
        .get::<Arc<Database>>(&Key::of::<Arc<Database>>())
        .unwrap();
    assert_eq!(db.url, "named");
}

#[test]
fn test_missing_dependency_fails_closed() {
    let container = Container::new();
    match container.build::<Database>() {
        Err(Error::Resolution { target, key }) => {
            assert!(target.ends_with("Database.url"), "got {target}");
            assert_eq!(key, std::any::type_name::<String>());
        }
        Err(other) => panic!("Expected Resolution error, got {other}"),
        Ok(db) => panic!("Expected failure, built {db:?}"),
    }

    container
        .register(None, Source::composite::<Database>())
        .unwrap();
    let key = Key::of::<Arc<Database>>();
    assert!(container.lookup(&key).is_none());
    assert!(matches!(
        container.try_lookup(&key),
        Err(Error::Resolution { .. })
    ));
}

#[test]
fn test_nested_failure_propagates() {
    let container = Container::new();
    container
        .register(None, Source::composite::<Database>())
        .unwrap();
    container
        .register(Some(Key::name("title")), Source::instance("t".to_string()))
        .unwrap();
    container
        .register(Some(Key::name("subtitle")), Source::instance("s".to_string()))
        .unwrap();

    // Database.url has no registration; Handler must not be built
    match container.build::<Handler>() {
        Err(Error::Resolution { target, .. }) => assert!(target.ends_with("Database.url")),
        Err(other) => panic!("Expected Resolution error, got {other}"),
        Ok(_) => panic!("Expected failure"),
    }
}

#[test]
fn test_cycle_detected() {
    let container = Container::new();
    container.register(None, Source::composite::<Left>()).unwrap();
    container
        .register(None, Source::composite::<Right>())
        .unwrap();

    match container.try_lookup(&Key::of::<Arc<Left>>()) {
        Err(Error::CyclicDependency { path }) => {
            assert_eq!(path.len(), 3);
            assert_eq!(path.first(), path.last());
        }
        other => panic!("Expected CyclicDependency, got {other:?}"),
    }
}

#[test]
fn test_self_referencing_deferred_key_is_a_cycle() {
    let container = Container::new();
    container
        .register(Some(Key::of::<Database>()), Source::composite::<Database>())
        .unwrap();

    assert!(matches!(
        container.try_lookup(&Key::of::<Database>()),
        Err(Error::CyclicDependency { .. })
    ));
}

#[test]
fn test_function_returning_its_own_parameter_is_a_cycle() {
    let container = Container::new();
    container
        .register(None, Source::function(|n: u8| n + 1))
        .unwrap();

    assert!(matches!(
        container.try_lookup(&Key::of::<u8>()),
        Err(Error::CyclicDependency { .. })
    ));
}

#[test]
fn test_depth_limit() {
    let container = Container::with_config(ContainerConfig {
        max_depth: 1,
        trace_resolutions: true,
    });
    container
        .register(Some(Key::name("url")), Source::instance("x".to_string()))
        .unwrap();
    container
        .register(None, Source::composite::<Database>())
        .unwrap();
    container
        .register(Some(Key::name("title")), Source::instance("t".to_string()))
        .unwrap();
    container
        .register(Some(Key::name("subtitle")), Source::instance("s".to_string()))
        .unwrap();

    // Handler occupies the only frame, so its Database field cannot be built
    assert!(matches!(
        container.build::<Handler>(),
        Err(Error::DepthExceeded { limit: 1, .. })
    ));
    assert!(container.build::<Database>().is_ok());
}

#[test]
fn test_invoke_resolves_arguments() {
    let container = with_strings();
    container
        .register(None, Source::composite::<Database>())
        .unwrap();
    container.register(None, Source::instance(2_usize)).unwrap();

    let rendered = container
        .invoke(|db: Arc<Database>, n: usize| format!("{}x{n}", db.url))
        .unwrap();
    assert_eq!(rendered, "postgres://dbx2");
}

#[test]
fn test_invoke_missing_argument() {
    let container = Container::new();
    match container.invoke(|n: i16| n) {
        Err(Error::Resolution { target, key }) => {
            assert!(target.ends_with("argument #0"), "got {target}");
            assert_eq!(key, "i16");
        }
        other => panic!("Expected Resolution error, got {other:?}"),
    }
}

#[test]
fn test_function_with_composite_parameter() {
    let container = with_strings();
    container
        .register(None, Source::composite::<Database>())
        .unwrap();
    container
        .register(
            Some(Key::name("dsn")),
            Source::function(|db: Arc<Database>| db.url.to_uppercase()),
        )
        .unwrap();

    assert_eq!(
        container.get::<String>(&Key::name("dsn")),
        Some("POSTGRES://DB".to_string())
    );
}
