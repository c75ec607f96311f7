use crate::{
    error::MalformedIdentifierError,
    quotes::{add_quotes, is_quoted, remove_quotes},
    value::Value,
};
use std::fmt;

///
/// FieldKind
///
/// Declared type category of a mapped field.
/// This is the key the converter chain dispatches on.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldKind {
    Bool,
    Int,
    BigInt,
    Float,
    Double,
    Text,
    Bytes,
    Uuid,
    Timestamp,
    /// Unit-only enum persisted by ordinal; carries its variant names.
    Enum(&'static [&'static str]),
}

impl FieldKind {
    /// Numeric and boolean kinds; these have a zero value.
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Int | Self::BigInt | Self::Float | Self::Double
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::BigInt => write!(f, "bigint"),
            Self::Float => write!(f, "float"),
            Self::Double => write!(f, "double"),
            Self::Text => write!(f, "text"),
            Self::Bytes => write!(f, "bytes"),
            Self::Uuid => write!(f, "uuid"),
            Self::Timestamp => write!(f, "timestamp"),
            Self::Enum(variants) => write!(f, "enum({})", variants.join("|")),
        }
    }
}

///
/// FieldType
///
/// Declared type of a field: its kind plus whether the field can hold
/// `Value::Null` (an `Option<_>` field) or not.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FieldType {
    pub kind: FieldKind,
    pub nullable: bool,
}

impl FieldType {
    #[must_use]
    pub const fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            nullable: false,
        }
    }

    #[must_use]
    pub const fn nullable(self) -> Self {
        Self {
            kind: self.kind,
            nullable: true,
        }
    }

    /// A non-nullable numeric or boolean field.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        !self.nullable && self.kind.is_primitive()
    }

    /// Zero value for primitive fields, `None` for everything else.
    #[must_use]
    pub fn zero_value(&self) -> Option<Value> {
        if self.nullable {
            return None;
        }

        match self.kind {
            FieldKind::Bool => Some(Value::Bool(false)),
            FieldKind::Int => Some(Value::Int(0)),
            FieldKind::BigInt => Some(Value::BigInt(0)),
            FieldKind::Float => Some(Value::Float(0.0)),
            FieldKind::Double => Some(Value::Double(0.0)),
            _ => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "option<{}>", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

///
/// ColumnName
///
/// Canonical (unquoted) column identifier plus its wire form.
/// The canonical name is the lookup key for field-subset operations;
/// the wire name is what statements emit.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ColumnName {
    canonical: String,
    wire: String,
}

impl ColumnName {
    /// Resolve an explicit override. Quoted on the wire, case preserved, when
    /// `case_sensitive` is set or the override is already quoted; otherwise
    /// lower-cased the way the store folds unquoted identifiers.
    pub fn explicit(name: &str, case_sensitive: bool) -> Result<Self, MalformedIdentifierError> {
        let wire = if case_sensitive || is_quoted(name) {
            add_quotes(name)
        } else {
            remove_quotes(name)?.to_lowercase()
        };
        let canonical = remove_quotes(&wire)?;

        Ok(Self { canonical, wire })
    }

    /// Structural default: the field's own name, lower-cased, unquoted.
    #[must_use]
    pub fn from_field(field_name: &str) -> Self {
        let canonical = field_name.to_lowercase();

        Self {
            wire: canonical.clone(),
            canonical,
        }
    }

    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    #[must_use]
    pub fn wire(&self) -> &str {
        &self.wire
    }

    #[must_use]
    pub fn is_quoted(&self) -> bool {
        self.canonical != self.wire
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_column_is_lowercase_field_name() {
        let column = ColumnName::from_field("userRank");

        assert_eq!(column.canonical(), "userrank");
        assert_eq!(column.wire(), "userrank");
        assert!(!column.is_quoted());
    }

    #[test]
    fn case_sensitive_override_is_quoted_on_the_wire() {
        let column = ColumnName::explicit("user_Name", true).unwrap();

        assert_eq!(column.canonical(), "user_Name");
        assert_eq!(column.wire(), "\"user_Name\"");
        assert!(column.is_quoted());
    }

    #[test]
    fn pre_quoted_override_keeps_its_quotes() {
        let column = ColumnName::explicit("\"Mixed\"", false).unwrap();

        assert_eq!(column.canonical(), "Mixed");
        assert_eq!(column.wire(), "\"Mixed\"");
    }

    #[test]
    fn plain_override_is_folded_to_lowercase() {
        let column = ColumnName::explicit("userName", false).unwrap();

        assert_eq!(column.canonical(), "username");
        assert_eq!(column.wire(), "username");
        assert!(!column.is_quoted());
    }

    #[test]
    fn one_ended_override_is_malformed() {
        assert!(ColumnName::explicit("bad\"", false).is_err());
    }

    #[test]
    fn zero_value_only_for_primitives() {
        assert_eq!(
            FieldType::new(FieldKind::Int).zero_value(),
            Some(Value::Int(0))
        );
        assert_eq!(
            FieldType::new(FieldKind::Bool).zero_value(),
            Some(Value::Bool(false))
        );
        assert_eq!(FieldType::new(FieldKind::Int).nullable().zero_value(), None);
        assert_eq!(FieldType::new(FieldKind::Text).zero_value(), None);
    }
}
