use crate::{
    convert::{InboundConverter, OutboundConverter},
    model::field::{FieldKind, FieldType},
    value::{Value, WireType},
};

///
/// NullToZero
///
/// A null cell for a non-nullable numeric/boolean field becomes that type's
/// zero value instead of failing the setter.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NullToZero;

impl InboundConverter for NullToZero {
    fn convert_in(&self, _: WireType, value: &Value, field_type: &FieldType) -> Option<Value> {
        if !value.is_null() {
            return None;
        }

        field_type.zero_value()
    }
}

///
/// BlobToBytes
///

#[derive(Clone, Copy, Debug, Default)]
pub struct BlobToBytes;

impl InboundConverter for BlobToBytes {
    fn convert_in(&self, _: WireType, value: &Value, field_type: &FieldType) -> Option<Value> {
        match (value, field_type.kind) {
            (Value::Blob(bytes), FieldKind::Bytes) => Some(Value::Bytes(bytes.clone())),
            _ => None,
        }
    }
}

///
/// OrdinalToEnum
///
/// Integer ordinal → enum constant. Out-of-range ordinals do not match, so
/// the raw integer reaches the setter and is reported there.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct OrdinalToEnum;

impl InboundConverter for OrdinalToEnum {
    fn convert_in(&self, _: WireType, value: &Value, field_type: &FieldType) -> Option<Value> {
        let FieldKind::Enum(variants) = field_type.kind else {
            return None;
        };
        let ordinal = u32::try_from(value.as_i64()?).ok()?;

        ((ordinal as usize) < variants.len()).then_some(Value::Enum(ordinal))
    }
}

///
/// BytesToBlob
///

#[derive(Clone, Copy, Debug, Default)]
pub struct BytesToBlob;

impl OutboundConverter for BytesToBlob {
    fn convert_out(&self, _: &FieldType, value: &Value) -> Option<Value> {
        match value {
            Value::Bytes(bytes) => Some(Value::Blob(bytes.clone())),
            _ => None,
        }
    }
}

///
/// EnumToOrdinal
///

#[derive(Clone, Copy, Debug, Default)]
pub struct EnumToOrdinal;

impl OutboundConverter for EnumToOrdinal {
    fn convert_out(&self, _: &FieldType, value: &Value) -> Option<Value> {
        match value {
            Value::Enum(ordinal) => i32::try_from(*ordinal).ok().map(Value::Int),
            _ => None,
        }
    }
}
