use crate::statement::{Clause, Ordering, QueryWriter};

///
/// Select
///
/// An empty column list selects `*`.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Select {
    pub table: String,
    pub columns: Vec<String>,
    pub clauses: Vec<Clause>,
    pub orderings: Vec<Ordering>,
    pub limit: Option<u32>,
    pub allow_filtering: bool,
}

impl Select {
    #[must_use]
    pub fn new(table: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            table: table.into(),
            columns,
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Modifiers
    // ------------------------------------------------------------------

    /// Add a where-clause term after the existing ones.
    #[must_use]
    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    #[must_use]
    pub fn order_by(mut self, ordering: Ordering) -> Self {
        self.orderings.push(ordering);
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn allow_filtering(mut self) -> Self {
        self.allow_filtering = true;
        self
    }

    pub(crate) fn write(&self, w: &mut QueryWriter) {
        w.push("SELECT ");
        if self.columns.is_empty() {
            w.push("*");
        } else {
            w.push(&self.columns.join(","));
        }
        w.push(" FROM ");
        w.push(&self.table);

        if !self.clauses.is_empty() {
            w.push(" WHERE ");
            w.list(&self.clauses, " AND ", |w, clause| clause.write(w));
        }
        if !self.orderings.is_empty() {
            w.push(" ORDER BY ");
            w.list(&self.orderings, ",", |w, ordering| ordering.write(w));
        }
        if let Some(limit) = self.limit {
            w.push(&format!(" LIMIT {limit}"));
        }
        if self.allow_filtering {
            w.push(" ALLOW FILTERING");
        }
    }
}
