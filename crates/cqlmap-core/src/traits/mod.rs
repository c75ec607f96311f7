use crate::{
    model::field::{FieldKind, FieldType},
    schema::EntitySchema,
    types::Timestamp,
    value::Value,
};
use uuid::Uuid;

///
/// Entity
///
/// A record type mapped to one table. `schema()` is the explicit schema
/// description; it is consulted once per registry, when the descriptor is
/// first derived. Decoding builds fresh instances through `Default`.
///
/// Usually implemented by `#[derive(Entity)]`.
///

pub trait Entity: Default + Send + Sync + 'static {
    fn schema() -> EntitySchema<Self>;
}

///
/// FieldValue
///
/// Conversion boundary between a typed field and the dynamic `Value`.
/// `from_value` returns `None` when the value is not representable, which
/// field setters surface as an `AccessError`.
///

pub trait FieldValue: Sized {
    fn field_type() -> FieldType;

    fn to_value(&self) -> Value;

    #[must_use]
    fn from_value(value: &Value) -> Option<Self>;
}

///
/// OrdinalEnum
///
/// Unit-only enum persisted by declaration index.
/// Usually implemented by `#[derive(OrdinalEnum)]`.
///

pub trait OrdinalEnum: Sized + Copy {
    const VARIANTS: &'static [&'static str];

    fn ordinal(&self) -> u32;

    fn from_ordinal(ordinal: u32) -> Option<Self>;
}

macro_rules! impl_field_value {
    ( $( $type:ty => $kind:ident : $variant:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                fn field_type() -> FieldType {
                    FieldType::new(FieldKind::$kind)
                }

                fn to_value(&self) -> Value {
                    Value::$variant(self.clone())
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v.clone()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_field_value! {
    bool => Bool: Bool,
    i32 => Int: Int,
    f32 => Float: Float,
    f64 => Double: Double,
    String => Text: Text,
    Uuid => Uuid: Uuid,
    Timestamp => Timestamp: Timestamp,
}

// counters and timestamps both arrive as 64-bit integers
impl FieldValue for i64 {
    fn field_type() -> FieldType {
        FieldType::new(FieldKind::BigInt)
    }

    fn to_value(&self) -> Value {
        Value::BigInt(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::BigInt(v) => Some(*v),
            Value::Int(v) => Some(Self::from(*v)),
            Value::Timestamp(v) => Some(v.millis()),
            _ => None,
        }
    }
}

impl FieldValue for Vec<u8> {
    fn field_type() -> FieldType {
        FieldType::new(FieldKind::Bytes)
    }

    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bytes(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn field_type() -> FieldType {
        T::field_type().nullable()
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            return Some(None);
        }

        T::from_value(value).map(Some)
    }
}

impl<T: FieldValue> FieldValue for Box<T> {
    fn field_type() -> FieldType {
        T::field_type()
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn from_value(value: &Value) -> Option<Self> {
        T::from_value(value).map(Self::new)
    }
}

///
/// TESTS
///
