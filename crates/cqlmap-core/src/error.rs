use crate::{model::field::FieldType, value::WireType};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Every failure surfaced by the mapping engine.
/// Each variant wraps the concern-specific error so callers can match on the
/// kind, or use `class()` when only the classification matters.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    MalformedIdentifier(#[from] MalformedIdentifierError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("execution failed: {0}")]
    Execution(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap a failure reported by the execution collaborator.
    pub fn execution(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Execution(Box::new(err))
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Schema(_) => ErrorClass::Schema,
            Self::Argument(_) => ErrorClass::Argument,
            Self::MalformedIdentifier(_) => ErrorClass::Identifier,
            Self::Access(_) => ErrorClass::Access,
            Self::Codec(_) => ErrorClass::Codec,
            Self::Config(_) => ErrorClass::Config,
            Self::Execution(_) => ErrorClass::Execution,
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {self}", self.class())
    }
}

///
/// ErrorClass
///
/// Stable classification of `Error`; none of these are retried internally.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorClass {
    Schema,
    Argument,
    Identifier,
    Access,
    Codec,
    Config,
    Execution,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Schema => "schema",
            Self::Argument => "argument",
            Self::Identifier => "identifier",
            Self::Access => "access",
            Self::Codec => "codec",
            Self::Config => "config",
            Self::Execution => "execution",
        };
        write!(f, "{label}")
    }
}

///
/// SchemaError
///
/// Metadata or caller bugs detected during derivation or statement
/// construction.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("entity '{entity}' declares no key fields")]
    NoKeys { entity: String },

    #[error("key number {number} already exists in '{entity}'")]
    DuplicateKeyNumber { entity: String, number: u32 },

    #[error("column '{column}' is mapped twice in '{entity}'")]
    DuplicateColumn { entity: String, column: String },

    #[error("unknown field name '{field}' for table {table}")]
    UnknownField { table: String, field: String },
}

///
/// ArgumentError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ArgumentError {
    #[error("specified {supplied} key values but {table} has only {declared} keys")]
    TooManyKeyValues {
        table: String,
        supplied: usize,
        declared: usize,
    },
}

///
/// MalformedIdentifierError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("single quote is found in {identifier}")]
pub struct MalformedIdentifierError {
    pub identifier: String,
}

///
/// AccessError
///
/// A field getter or setter could not complete. Raised when a value handed to
/// a setter is not representable by the field's declared type.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum AccessError {
    #[error("field '{field}' of type {expected} cannot hold {found}")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        found: String,
    },
}

///
/// CodecError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CodecError {
    #[error("{wire_type} value must be {expected} bytes, found {found}")]
    InvalidLength {
        wire_type: WireType,
        expected: usize,
        found: usize,
    },

    #[error("{wire_type} value is not valid utf-8")]
    InvalidUtf8 { wire_type: WireType },

    #[error("{wire_type} value must be ascii")]
    InvalidAscii { wire_type: WireType },

    #[error("cannot encode {value} as {wire_type}")]
    Unencodable { wire_type: WireType, value: String },
}
