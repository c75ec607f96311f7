mod common;

use common::{Audit, Example, RetentionPolicy};
use cqlmap::{
    CLUSTERING_KEY_OFFSET,
    error::{ErrorClass, SchemaError},
    prelude::*,
};

#[derive(Debug, Default, Entity)]
struct NoKeys {
    value: i32,
}

#[derive(Debug, Default, Entity)]
struct EqualKeys {
    #[cql(key = 1)]
    key1: i32,
    #[cql(key = 1)]
    key2: i32,
}

#[derive(Debug, Default, Entity)]
#[cql(keyspace = "metrics")]
struct PageView {
    #[cql(key = 1)]
    page: String,
    #[cql(column = "\"Hits\"")]
    hits: i64,
}

#[derive(Debug, Default, Entity)]
struct Profile {
    #[cql(key = 1)]
    id: i32,
    #[cql(column = "displayName")]
    display_name: String,
}

fn user_id() -> Uuid {
    Uuid::from_u128(0x00c0_ffee_0000_4000_8000_0000_0000_0001)
}

#[test]
fn derived_structure() {
    let registry = SchemaRegistry::new();
    let descriptor = registry.descriptor::<Example>().unwrap();

    assert_eq!(descriptor.table(), "\"test_streaming_Cassandra\"");
    assert_eq!(
        descriptor.columns(),
        [
            "user_rank",
            "user_id",
            "\"user_Name\"",
            "data",
            "number",
            "enable",
            "retention_policy",
            "created_at",
        ]
    );

    let keys: Vec<_> = descriptor.keys().iter().map(|(n, c)| (*n, c.clone())).collect();
    assert_eq!(
        keys,
        [
            (1, "user_rank".to_string()),
            (1 + CLUSTERING_KEY_OFFSET, "user_id".to_string()),
        ]
    );
    assert!(descriptor.field("user_Name").is_some());
    assert!(descriptor.field("cached").is_none());
}

#[test]
fn no_keys_is_rejected() {
    let err = SchemaRegistry::new().descriptor::<NoKeys>().unwrap_err();

    assert_eq!(err.class(), ErrorClass::Schema);
}

#[test]
fn equal_keys_are_rejected() {
    let err = SchemaRegistry::new().descriptor::<EqualKeys>().unwrap_err();

    assert!(matches!(
        err,
        cqlmap::Error::Schema(SchemaError::DuplicateKeyNumber { number: 1, .. })
    ));
}

#[test]
fn keyspace_and_quoted_override() {
    let descriptor = SchemaRegistry::new().descriptor::<PageView>().unwrap();

    assert_eq!(descriptor.table(), "metrics.pageview");
    assert_eq!(descriptor.columns(), ["page", "\"Hits\""]);
    assert_eq!(descriptor.position("Hits"), Some(1));
}

#[test]
fn unquoted_override_matches_the_folded_cell_name() {
    let descriptor = SchemaRegistry::new().descriptor::<Profile>().unwrap();
    assert_eq!(descriptor.columns(), ["id", "displayname"]);

    let row = Row::default()
        .with(Cell::encode("id", WireType::Int, &Value::Int(4)).unwrap())
        .with(Cell::encode("displayname", WireType::Text, &Value::Text("Ada".into())).unwrap());
    let decoded = descriptor.decode_row(&row).unwrap();

    assert_eq!(decoded.id, 4);
    assert_eq!(decoded.display_name, "Ada");
}

#[test]
fn values_follow_column_order() {
    let descriptor = SchemaRegistry::new().descriptor::<Example>().unwrap();
    let example = Example::full(1, user_id());

    assert_eq!(
        descriptor.values(&example),
        [
            Value::Int(1),
            Value::Uuid(user_id()),
            Value::Text("Admin".to_string()),
            Value::Blob(vec![5, 6, 7]),
            Value::Int(2),
            Value::Bool(true),
            Value::Int(2),
            Value::Timestamp(Timestamp::from_millis(1_700_000_000_000)),
        ]
    );
    assert_eq!(
        descriptor.key_values(&example),
        [Value::Int(1), Value::Uuid(user_id())]
    );
}

#[test]
fn sparse_entity_values_carry_nulls_and_zeros() {
    let descriptor = SchemaRegistry::new().descriptor::<Example>().unwrap();
    let values = descriptor.values(&Example::new(1, user_id(), "Admin"));

    assert_eq!(values[3], Value::Null);
    assert_eq!(values[4], Value::Int(0));
    assert_eq!(values[5], Value::Bool(false));
    assert_eq!(values[6], Value::Null);
}

#[test]
fn key_only_row_decodes_to_defaults() {
    let descriptor = SchemaRegistry::new().descriptor::<Example>().unwrap();
    let row = Row::default()
        .with(Cell::encode("user_rank", WireType::Int, &Value::Int(1)).unwrap())
        .with(Cell::encode("user_id", WireType::Uuid, &Value::Uuid(user_id())).unwrap())
        .with(Cell::new("user_Name", WireType::Text, None))
        .with(Cell::new("data", WireType::Blob, None))
        .with(Cell::new("number", WireType::Int, None))
        .with(Cell::new("enable", WireType::Boolean, None))
        .with(Cell::new("retention_policy", WireType::Int, None))
        .with(Cell::new("created_at", WireType::Timestamp, None));

    let decoded = descriptor.decode_row(&row).unwrap();

    assert_eq!(decoded.user_rank, 1);
    assert_eq!(decoded.user_id, user_id());
    assert_eq!(decoded.user_name, None);
    assert_eq!(decoded.data, None);
    assert_eq!(decoded.number, 0);
    assert!(!decoded.enable);
    assert_eq!(decoded.retention_policy, None);
    assert_eq!(decoded.audit, Audit::default());
    assert_eq!(decoded.audit.created_at, Timestamp::EPOCH);
}

#[test]
fn ordinal_enum_derive() {
    assert_eq!(RetentionPolicy::VARIANTS, ["Source", "Class", "Runtime"]);
    assert_eq!(RetentionPolicy::Runtime.ordinal(), 2);
    assert_eq!(RetentionPolicy::from_ordinal(1), Some(RetentionPolicy::Class));
    assert_eq!(RetentionPolicy::from_ordinal(3), None);
    assert_eq!(RetentionPolicy::Class.to_value(), Value::Enum(1));
}

#[test]
fn statements_for_derived_entity() {
    let descriptor = SchemaRegistry::new().descriptor::<Example>().unwrap();

    let select = descriptor.select(&[Value::Int(1)]).unwrap();
    assert!(select.to_string().ends_with("FROM \"test_streaming_Cassandra\" WHERE user_rank=1;"));

    let err = descriptor
        .select(&[Value::Int(1), Value::Uuid(user_id()), Value::Int(3)])
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::Argument);

    let err = descriptor
        .insert_fields(&Example::full(1, user_id()), &["missing"])
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::Schema);
}
