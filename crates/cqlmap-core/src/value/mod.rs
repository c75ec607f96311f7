mod wire;


use crate::types::Timestamp;
use std::fmt;
use uuid::Uuid;

// re-exports
pub use wire::WireType;

///
/// Value
///
/// Dynamic value exchanged between field accessors, the converter chain,
/// statements, and the wire codec.
///
/// Bytes  → field-side byte sequence (what a `Vec<u8>` field holds).
/// Blob   → wire-side blob; the outbound chain turns `Bytes` into `Blob`.
/// Enum   → field-side enum ordinal; the outbound chain turns it into `Int`.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i32),
    BigInt(i64),
    Float(f32),
    Double(f64),
    Text(String),
    Bytes(Vec<u8>),
    Blob(Vec<u8>),
    Uuid(Uuid),
    Timestamp(Timestamp),
    Enum(u32),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short variant label used in diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::BigInt(_) => "bigint",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Blob(_) => "blob",
            Self::Uuid(_) => "uuid",
            Self::Timestamp(_) => "timestamp",
            Self::Enum(_) => "enum",
        }
    }

    /// Integer view used by ordinal conversions.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v as i64),
            Self::BigInt(v) => Some(*v),
            _ => None,
        }
    }
}

/// Renders the value as a CQL literal.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::BigInt(v) => write!(f, "{v}"),
            Self::Float(v) if !v.is_finite() => write_non_finite(f, f64::from(*v)),
            Self::Double(v) if !v.is_finite() => write_non_finite(f, *v),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "'{}'", v.replace('\'', "''")),
            Self::Bytes(v) | Self::Blob(v) => {
                write!(f, "0x")?;
                for byte in v {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Self::Uuid(v) => write!(f, "{v}"),
            Self::Timestamp(v) => write!(f, "{}", v.millis()),
            Self::Enum(v) => write!(f, "{v}"),
        }
    }
}

// CQL spells the non-finite literals out
fn write_non_finite(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_nan() {
        f.write_str("NaN")
    } else if v > 0.0 {
        f.write_str("Infinity")
    } else {
        f.write_str("-Infinity")
    }
}

macro_rules! impl_from_for_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for_value! {
    bool => Bool,
    i32 => Int,
    i64 => BigInt,
    f32 => Float,
    f64 => Double,
    String => Text,
    &str => Text,
    Vec<u8> => Bytes,
    Uuid => Uuid,
    Timestamp => Timestamp,
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
