use crate::{error::CodecError, types::Timestamp, value::Value};
use std::fmt;
use uuid::Uuid;

///
/// WireType
///
/// Column types as reported by the store alongside raw cell bytes.
/// Encoding follows the CQL native protocol: big-endian fixed width for
/// numbers, raw UTF-8 for text, raw bytes for blobs.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WireType {
    Ascii,
    BigInt,
    Blob,
    Boolean,
    Counter,
    Double,
    Float,
    Int,
    Text,
    TimeUuid,
    Timestamp,
    Uuid,
    Varchar,
}

impl WireType {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::BigInt => "bigint",
            Self::Blob => "blob",
            Self::Boolean => "boolean",
            Self::Counter => "counter",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::Text => "text",
            Self::TimeUuid => "timeuuid",
            Self::Timestamp => "timestamp",
            Self::Uuid => "uuid",
            Self::Varchar => "varchar",
        }
    }

    /// Decode one non-null cell into its intermediate value.
    pub fn decode(self, bytes: &[u8]) -> Result<Value, CodecError> {
        let value = match self {
            Self::Boolean => Value::Bool(fixed::<1>(self, bytes)?[0] != 0),
            Self::Int => Value::Int(i32::from_be_bytes(fixed(self, bytes)?)),
            Self::BigInt | Self::Counter => Value::BigInt(i64::from_be_bytes(fixed(self, bytes)?)),
            Self::Timestamp => Value::Timestamp(Timestamp::from_millis(i64::from_be_bytes(
                fixed(self, bytes)?,
            ))),
            Self::Float => Value::Float(f32::from_be_bytes(fixed(self, bytes)?)),
            Self::Double => Value::Double(f64::from_be_bytes(fixed(self, bytes)?)),
            Self::Text | Self::Varchar => Value::Text(
                String::from_utf8(bytes.to_vec())
                    .map_err(|_| CodecError::InvalidUtf8 { wire_type: self })?,
            ),
            Self::Ascii => {
                if !bytes.is_ascii() {
                    return Err(CodecError::InvalidAscii { wire_type: self });
                }
                Value::Text(String::from_utf8_lossy(bytes).into_owned())
            }
            Self::Blob => Value::Blob(bytes.to_vec()),
            Self::Uuid | Self::TimeUuid => Value::Uuid(Uuid::from_bytes(fixed(self, bytes)?)),
        };

        Ok(value)
    }

    /// Encode a wire-side value; `Null` encodes to an absent cell.
    pub fn encode(self, value: &Value) -> Result<Option<Vec<u8>>, CodecError> {
        let bytes = match (self, value) {
            (_, Value::Null) => return Ok(None),
            (Self::Boolean, Value::Bool(v)) => vec![u8::from(*v)],
            (Self::Int, Value::Int(v)) => v.to_be_bytes().to_vec(),
            (Self::BigInt | Self::Counter, Value::BigInt(v)) => v.to_be_bytes().to_vec(),
            (Self::BigInt | Self::Counter, Value::Int(v)) => i64::from(*v).to_be_bytes().to_vec(),
            (Self::Timestamp, Value::Timestamp(v)) => v.millis().to_be_bytes().to_vec(),
            (Self::Timestamp, Value::BigInt(v)) => v.to_be_bytes().to_vec(),
            (Self::Float, Value::Float(v)) => v.to_be_bytes().to_vec(),
            (Self::Double, Value::Double(v)) => v.to_be_bytes().to_vec(),
            (Self::Double, Value::Float(v)) => f64::from(*v).to_be_bytes().to_vec(),
            (Self::Text | Self::Varchar, Value::Text(v)) => v.as_bytes().to_vec(),
            (Self::Ascii, Value::Text(v)) if v.is_ascii() => v.as_bytes().to_vec(),
            (Self::Blob, Value::Blob(v) | Value::Bytes(v)) => v.clone(),
            (Self::Uuid | Self::TimeUuid, Value::Uuid(v)) => v.as_bytes().to_vec(),
            _ => {
                return Err(CodecError::Unencodable {
                    wire_type: self,
                    value: value.to_string(),
                });
            }
        };

        Ok(Some(bytes))
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn fixed<const N: usize>(wire_type: WireType, bytes: &[u8]) -> Result<[u8; N], CodecError> {
    bytes.try_into().map_err(|_| CodecError::InvalidLength {
        wire_type,
        expected: N,
        found: bytes.len(),
    })
}
