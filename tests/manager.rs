use std::sync::Arc;

use gqlweave::config::ManagerConfig;
use gqlweave::fragment::{ResolverSet, SchemaFragment, TypeDefs};
use gqlweave::manager::SchemaManager;
use gqlweave::types::OperationKind;
use serde_json::{Value, json};

mod common;
use common::*;

#[test]
fn empty_registry_composes_to_empty_schema() {
    let mut manager = SchemaManager::new(ManagerConfig::default());

    let schema = manager.get_schema();

    assert_eq!(schema.type_defs, "");
    assert!(schema.resolvers.is_empty());
}

#[test]
fn fragments_compose_in_registration_order() {
    let mut manager = SchemaManager::new(ManagerConfig::default());
    manager.add_schema(queries_fragment("  first: Int"));
    manager.add_schema(queries_fragment("  second: Int"));

    let schema = manager.get_schema();

    assert_eq!(schema.type_defs, "type Query {\n  first: Int\n  second: Int\n}\n");
}

#[test]
fn empty_fragment_is_a_no_op() {
    let mut manager = SchemaManager::new(ManagerConfig::default());
    manager.add_schema(SchemaFragment::new());
    manager.add_schema(SchemaFragment::new().with_type_defs(TypeDefs::new()));

    assert!(manager.registry().is_empty());
    assert_eq!(manager.get_schema().type_defs, "");
}

#[test]
fn later_registration_overrides_resolver_field() {
    let mut manager = SchemaManager::new(ManagerConfig::default());
    manager.add_schema(query_resolver_fragment("foo", json!("f1")));
    manager.add_schema(query_resolver_fragment("foo", json!("f2")));

    let schema = manager.get_schema();

    let foo = schema.resolvers.field(OperationKind::Query, "foo").unwrap();
    assert_eq!(foo(Value::Null), json!("f2"));
}

#[test]
fn test_mode_injects_diagnostic_fragment() {
    let mut manager = SchemaManager::new(ManagerConfig::new().with_test(true));

    let schema = manager.get_schema();

    assert!(schema.type_defs.contains("type Query {"));
    assert!(schema.type_defs.contains("hello: String"));

    let hello = schema.resolvers.field(OperationKind::Query, "hello").unwrap();
    assert_eq!(hello(Value::Null), json!("Hello world!"));
}

#[test]
fn test_mode_injection_accumulates_per_get_schema_call() {
    let mut manager = SchemaManager::new(ManagerConfig::new().with_test(true));

    let first = manager.get_schema();
    let second = manager.get_schema();

    assert_eq!(first.type_defs.matches("hello: String").count(), 1);
    // The diagnostic fragment is re-registered on every read.
    assert_eq!(second.type_defs.matches("hello: String").count(), 2);
}

#[test]
fn diagnostic_fragment_coexists_with_contributed_fragments() {
    let mut manager = SchemaManager::new(ManagerConfig::new().with_test(true));
    manager.add_schema(queries_fragment("  users: [User]"));

    let schema = manager.get_schema();

    assert_eq!(
        schema.type_defs,
        "type Query {\n  users: [User]\n  hello: String\n}\n"
    );
}

#[test]
fn display_reports_missing_logger_and_test_state() {
    let manager = SchemaManager::new(ManagerConfig::default());

    let summary = manager.to_string();

    assert!(summary.contains("[gqlweave]"));
    assert!(summary.contains("logger: no"));
    assert!(summary.contains("test: false"));
}

#[test]
fn display_reports_configured_logger_and_test_state() {
    let sink = RecordingSink::new();
    let manager = SchemaManager::new(
        ManagerConfig::new()
            .with_logger(Arc::new(sink))
            .with_test(true),
    );

    let summary = manager.to_string();

    assert!(summary.contains("logger: yes"));
    assert!(summary.contains("test: true"));
}

#[test]
fn contributors_share_one_event_channel() {
    let manager = SchemaManager::new(ManagerConfig::default());

    let first = Arc::clone(manager.event_channel());
    let second = Arc::clone(manager.event_channel());

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn types_only_fragment_composes_without_operation_wrapper() {
    let mut manager = SchemaManager::new(ManagerConfig::default());
    manager.add_schema(types_fragment("interface Node {\n  id: ID!\n}"));

    let schema = manager.get_schema();

    assert_eq!(schema.type_defs, "interface Node {\n  id: ID!\n}\n");
    assert!(!schema.type_defs.contains("type Query"));
    assert!(!schema.type_defs.contains("type Mutation"));
    assert!(!schema.type_defs.contains("type Subscription"));
}

#[test]
fn malformed_sections_pass_through_uninterpreted() {
    let mut manager = SchemaManager::new(ManagerConfig::default());
    manager.add_schema(
        SchemaFragment::new()
            .with_type_defs(TypeDefs::new().with_queries("this is not valid SDL at all")),
    );

    let schema = manager.get_schema();

    assert!(schema.type_defs.contains("this is not valid SDL at all"));
}

#[test]
fn from_env_defaults_to_test_off() {
    // GQLWEAVE_TEST_SCHEMA is not set in the test environment.
    let config = ManagerConfig::from_env();
    assert!(!config.test);
}

#[test]
fn zero_channel_capacity_is_coerced_to_default() {
    let config = ManagerConfig::new().with_channel_capacity(0);
    assert_eq!(config.channel_capacity, ManagerConfig::DEFAULT_CHANNEL_CAPACITY);
}

#[test]
fn resolver_only_fragment_leaves_type_defs_untouched() {
    let mut manager = SchemaManager::new(ManagerConfig::default());
    manager.add_schema(
        SchemaFragment::new().with_resolvers(ResolverSet::new().query("lone", |_| Value::Null)),
    );

    let schema = manager.get_schema();

    assert_eq!(schema.type_defs, "");
    assert!(schema.resolvers.field(OperationKind::Query, "lone").is_some());
}
