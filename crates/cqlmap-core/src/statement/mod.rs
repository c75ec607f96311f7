//! Statement descriptions.
//!
//! Statements are plain data built from a descriptor (see `build`) or by
//! hand. They never execute anything; an `Executor` receives them and either
//! renders CQL text with inline literals (`Display`) or with `?` markers and
//! the ordered bind values (`Statement::prepare`).

mod build;
mod clause;
mod delete;
mod insert;
mod select;
mod update;


use crate::value::Value;
use std::fmt;

// re-exports
pub use clause::{Assignment, Clause, CompareOp, Ordering, Using};
pub use delete::Delete;
pub use insert::Insert;
pub use select::Select;
pub use update::Update;

///
/// Statement
///

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl Statement {
    #[must_use]
    pub fn table(&self) -> &str {
        match self {
            Self::Select(s) => &s.table,
            Self::Insert(s) => &s.table,
            Self::Update(s) => &s.table,
            Self::Delete(s) => &s.table,
        }
    }

    /// Short label for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Select(_) => "select",
            Self::Insert(_) => "insert",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
        }
    }

    /// Whether the statement carries a lightweight-transaction condition.
    #[must_use]
    pub const fn is_conditional(&self) -> bool {
        match self {
            Self::Select(_) => false,
            Self::Insert(s) => s.if_not_exists,
            Self::Update(s) => s.if_exists,
            Self::Delete(s) => s.if_exists,
        }
    }

    /// Render with `?` bind markers.
    #[must_use]
    pub fn prepare(&self) -> Prepared {
        let mut w = QueryWriter::prepared();
        self.write(&mut w);
        w.finish()
    }

    fn write(&self, w: &mut QueryWriter) {
        match self {
            Self::Select(s) => s.write(w),
            Self::Insert(s) => s.write(w),
            Self::Update(s) => s.write(w),
            Self::Delete(s) => s.write(w),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = QueryWriter::inline();
        self.write(&mut w);
        f.write_str(&w.finish().query)
    }
}

macro_rules! impl_statement_from {
    ( $( $type:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Statement {
                fn from(statement: $type) -> Self {
                    Self::$type(statement)
                }
            }

            impl fmt::Display for $type {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let mut w = QueryWriter::inline();
                    self.write(&mut w);
                    f.write_str(&w.finish().query)
                }
            }
        )*
    };
}

impl_statement_from!(Select, Insert, Update, Delete);

///
/// Prepared
/// Query text with `?` markers plus the values to bind, in marker order.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Prepared {
    pub query: String,
    pub values: Vec<Value>,
}

///
/// QueryWriter
///

pub(crate) struct QueryWriter {
    query: String,
    binds: Option<Vec<Value>>,
}

impl QueryWriter {
    const fn inline() -> Self {
        Self {
            query: String::new(),
            binds: None,
        }
    }

    const fn prepared() -> Self {
        Self {
            query: String::new(),
            binds: Some(Vec::new()),
        }
    }

    pub(crate) fn push(&mut self, text: &str) {
        self.query.push_str(text);
    }

    pub(crate) fn value(&mut self, value: &Value) {
        match &mut self.binds {
            Some(binds) => {
                self.query.push('?');
                binds.push(value.clone());
            }
            None => self.query.push_str(&value.to_string()),
        }
    }

    /// Write `items` separated by `sep`.
    pub(crate) fn list<T>(&mut self, items: &[T], sep: &str, mut each: impl FnMut(&mut Self, &T)) {
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                self.push(sep);
            }
            each(self, item);
        }
    }

    fn finish(mut self) -> Prepared {
        self.query.push(';');

        Prepared {
            query: self.query,
            values: self.binds.unwrap_or_default(),
        }
    }
}
