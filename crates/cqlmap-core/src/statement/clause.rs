use crate::{statement::QueryWriter, value::Value};
use std::fmt;

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CompareOp {
    Eq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CompareOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

///
/// Clause
///
/// One where-clause term. The column is a wire name and is emitted as is.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Clause {
    pub column: String,
    pub op: CompareOp,
    pub value: Value,
}

impl Clause {
    #[must_use]
    pub fn new(column: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, CompareOp::Eq, value)
    }

    #[must_use]
    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, CompareOp::Lt, value)
    }

    #[must_use]
    pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, CompareOp::Lte, value)
    }

    #[must_use]
    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, CompareOp::Gt, value)
    }

    #[must_use]
    pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, CompareOp::Gte, value)
    }

    pub(crate) fn write(&self, w: &mut QueryWriter) {
        w.push(&self.column);
        w.push(self.op.symbol());
        w.value(&self.value);
    }
}

///
/// Assignment
///

#[derive(Clone, Debug, PartialEq)]
pub enum Assignment {
    Set { column: String, value: Value },
    Increment { column: String, by: Value },
    Decrement { column: String, by: Value },
}

impl Assignment {
    #[must_use]
    pub fn set(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Set {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Counter increment (`c=c+by`).
    #[must_use]
    pub fn increment(column: impl Into<String>, by: i64) -> Self {
        Self::Increment {
            column: column.into(),
            by: Value::BigInt(by),
        }
    }

    #[must_use]
    pub fn decrement(column: impl Into<String>, by: i64) -> Self {
        Self::Decrement {
            column: column.into(),
            by: Value::BigInt(by),
        }
    }

    #[must_use]
    pub fn column(&self) -> &str {
        match self {
            Self::Set { column, .. }
            | Self::Increment { column, .. }
            | Self::Decrement { column, .. } => column,
        }
    }

    pub(crate) fn write(&self, w: &mut QueryWriter) {
        match self {
            Self::Set { column, value } => {
                w.push(column);
                w.push("=");
                w.value(value);
            }
            Self::Increment { column, by } | Self::Decrement { column, by } => {
                let sign = if matches!(self, Self::Increment { .. }) {
                    "+"
                } else {
                    "-"
                };
                w.push(column);
                w.push("=");
                w.push(column);
                w.push(sign);
                w.value(by);
            }
        }
    }
}

///
/// Ordering
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ordering {
    pub column: String,
    pub descending: bool,
}

impl Ordering {
    #[must_use]
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            descending: false,
        }
    }

    #[must_use]
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            descending: true,
        }
    }

    pub(crate) fn write(&self, w: &mut QueryWriter) {
        w.push(&self.column);
        w.push(if self.descending { " DESC" } else { " ASC" });
    }
}

///
/// Using
///
/// `USING TTL … AND TIMESTAMP …` options of a write.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Using {
    /// Time to live in seconds.
    pub ttl: Option<u32>,
    /// Write timestamp in microseconds.
    pub timestamp: Option<i64>,
}

impl Using {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ttl.is_none() && self.timestamp.is_none()
    }

    pub(crate) fn write(&self, w: &mut QueryWriter) {
        if self.is_empty() {
            return;
        }

        w.push(" USING ");
        if let Some(ttl) = self.ttl {
            w.push(&format!("TTL {ttl}"));
            if self.timestamp.is_some() {
                w.push(" AND ");
            }
        }
        if let Some(timestamp) = self.timestamp {
            w.push(&format!("TIMESTAMP {timestamp}"));
        }
    }
}
