mod common;

use common::Example;
use cqlmap::{
    config::MapperConfig,
    error::ErrorClass,
    model::field::{FieldKind, FieldType},
    prelude::*,
};

fn user_id() -> Uuid {
    Uuid::from_u128(77)
}

#[derive(Debug, Default, Entity)]
struct Visit {
    #[cql(key = 1)]
    page: String,
    hits: i64,
}

#[test]
fn json_config_sets_default_keyspace() {
    let config = MapperConfig::from_json(r#"{ "default_keyspace": "analytics" }"#).unwrap();
    let registry = SchemaRegistry::with_config(config);

    assert_eq!(registry.descriptor::<Visit>().unwrap().table(), "analytics.visit");
    assert!(registry.config().builtin_converters);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = MapperConfig::from_json("{ default_keyspace: ").unwrap_err();

    assert_eq!(err.class(), ErrorClass::Config);
    assert!(err.display_with_class().starts_with("config: "));
}

#[test]
fn without_builtins_bytes_are_not_converted() {
    let config = MapperConfig::from_json(r#"{ "builtin_converters": false }"#).unwrap();
    let registry = SchemaRegistry::with_config(config);
    let descriptor = registry.descriptor::<Example>().unwrap();
    let example = Example::full(1, user_id());

    let values = descriptor.values(&example);
    assert_eq!(values[3], Value::Bytes(vec![5, 6, 7]));
    assert_eq!(values[6], Value::Enum(2));

    // a blob cell no longer reaches a byte field
    let row = Row::default().with(Cell::new("data", WireType::Blob, Some(vec![1])));
    assert_eq!(
        descriptor.decode_row(&row).unwrap_err().class(),
        ErrorClass::Access
    );
}

#[test]
fn custom_converters_run_in_their_position() {
    let registry = SchemaRegistry::builder()
        .prepend_inbound(|wire: WireType, value: &Value, field: &FieldType| {
            match (wire, value, field.kind) {
                (WireType::Text, Value::Text(text), FieldKind::Text) => {
                    Some(Value::Text(text.trim().to_string()))
                }
                _ => None,
            }
        })
        .append_outbound(|field: &FieldType, value: &Value| match (field.kind, value) {
            (FieldKind::BigInt, Value::BigInt(n)) if *n < 0 => Some(Value::BigInt(0)),
            _ => None,
        })
        .build();
    let descriptor = registry.descriptor::<Visit>().unwrap();

    let visit = Visit {
        page: "home".to_string(),
        hits: -5,
    };
    assert_eq!(descriptor.values(&visit)[1], Value::BigInt(0));

    let row = Row::default()
        .with(Cell::encode("page", WireType::Text, &Value::Text("  about ".into())).unwrap())
        .with(Cell::encode("hits", WireType::Counter, &Value::BigInt(3)).unwrap());
    let decoded = descriptor.decode_row(&row).unwrap();

    assert_eq!(decoded.page, "about");
    assert_eq!(decoded.hits, 3);
}
