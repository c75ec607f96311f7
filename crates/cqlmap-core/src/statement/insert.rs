use crate::{
    statement::{QueryWriter, Using},
    value::Value,
};

///
/// Insert
///
/// `columns` and `values` are parallel.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Insert {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<Value>,
    pub if_not_exists: bool,
    pub using: Using,
}

impl Insert {
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Append one column/value pair.
    #[must_use]
    pub fn value(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.columns.push(column.into());
        self.values.push(value.into());
        self
    }

    // ------------------------------------------------------------------
    // Modifiers
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    #[must_use]
    pub const fn ttl(mut self, seconds: u32) -> Self {
        self.using.ttl = Some(seconds);
        self
    }

    #[must_use]
    pub const fn timestamp(mut self, micros: i64) -> Self {
        self.using.timestamp = Some(micros);
        self
    }

    /// Value bound to `column`, if the insert carries it.
    #[must_use]
    pub fn value_of(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|index| &self.values[index])
    }

    pub(crate) fn write(&self, w: &mut QueryWriter) {
        w.push("INSERT INTO ");
        w.push(&self.table);
        w.push(" (");
        w.push(&self.columns.join(","));
        w.push(") VALUES (");
        w.list(&self.values, ",", |w, value| w.value(value));
        w.push(")");

        if self.if_not_exists {
            w.push(" IF NOT EXISTS");
        }
        self.using.write(w);
    }
}
