use crate::statement::{Assignment, Clause, QueryWriter, Using};

///
/// Update
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Update {
    pub table: String,
    pub assignments: Vec<Assignment>,
    pub clauses: Vec<Clause>,
    pub if_exists: bool,
    pub using: Using,
}

impl Update {
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn set(mut self, assignment: Assignment) -> Self {
        self.assignments.push(assignment);
        self
    }

    #[must_use]
    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    // ------------------------------------------------------------------
    // Modifiers
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn if_exists(mut self) -> Self {
        self.if_exists = true;
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

    pub(crate) fn write(&self, w: &mut QueryWriter) {
        w.push("UPDATE ");
        w.push(&self.table);
        self.using.write(w);

        w.push(" SET ");
        w.list(&self.assignments, ",", |w, assignment| assignment.write(w));

        if !self.clauses.is_empty() {
            w.push(" WHERE ");
            w.list(&self.clauses, " AND ", |w, clause| clause.write(w));
        }
        if self.if_exists {
            w.push(" IF EXISTS");
        }
    }
}
