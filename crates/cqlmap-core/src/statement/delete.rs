use crate::statement::{Clause, QueryWriter};

///
/// Delete
/// Whole-row delete.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Delete {
    pub table: String,
    pub clauses: Vec<Clause>,
    pub if_exists: bool,
    pub timestamp: Option<i64>,
}

impl Delete {
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    #[must_use]
    pub const fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }

    #[must_use]
    pub const fn timestamp(mut self, micros: i64) -> Self {
        self.timestamp = Some(micros);
        self
    }

    pub(crate) fn write(&self, w: &mut QueryWriter) {
        w.push("DELETE FROM ");
        w.push(&self.table);

        if let Some(timestamp) = self.timestamp {
            w.push(&format!(" USING TIMESTAMP {timestamp}"));
        }
        if !self.clauses.is_empty() {
            w.push(" WHERE ");
            w.list(&self.clauses, " AND ", |w, clause| clause.write(w));
        }
        if self.if_exists {
            w.push(" IF EXISTS");
        }
    }
}
