//! Statement construction from an entity descriptor.
//!
//! Every check runs before a statement is returned; a statement that comes
//! back is always executable as far as the mapping is concerned.

use crate::{
    error::{ArgumentError, Error, SchemaError},
    model::entity::EntityDescriptor,
    quotes::remove_quotes,
    statement::{Assignment, Clause, Delete, Insert, Select, Update},
    value::Value,
};
use tracing::trace;

impl<E: 'static> EntityDescriptor<E> {
    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Select by a key prefix. Fewer values than keys is a range query.
    pub fn select(&self, keys: &[Value]) -> Result<Select, Error> {
        let clauses = self.key_clauses(keys)?;
        trace!(table = self.table(), keys = keys.len(), "built select");

        Ok(self.select_with_clauses(clauses))
    }

    /// Select every row of the table.
    #[must_use]
    pub fn select_all(&self) -> Select {
        Select::new(self.table(), self.columns().to_vec())
    }

    /// Select by the full key held by `entity`.
    #[must_use]
    pub fn select_entity(&self, entity: &E) -> Select {
        self.select_with_clauses(self.entity_key_clauses(entity))
    }

    // ------------------------------------------------------------------
    // Deletes
    // ------------------------------------------------------------------

    pub fn delete(&self, keys: &[Value]) -> Result<Delete, Error> {
        let clauses = self.key_clauses(keys)?;
        trace!(table = self.table(), keys = keys.len(), "built delete");

        Ok(Delete {
            clauses,
            ..Delete::new(self.table())
        })
    }

    #[must_use]
    pub fn delete_entity(&self, entity: &E) -> Delete {
        Delete {
            clauses: self.entity_key_clauses(entity),
            ..Delete::new(self.table())
        }
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Insert every mapped column.
    #[must_use]
    pub fn insert(&self, entity: &E) -> Insert {
        trace!(table = self.table(), columns = self.columns().len(), "built insert");

        Insert {
            columns: self.columns().to_vec(),
            values: self.values(entity),
            ..Insert::new(self.table())
        }
    }

    /// Insert the keys plus a subset of fields.
    ///
    /// With an empty `fields` list the subset is every non-key field whose
    /// value is not null. Names may be quoted; key names are ignored since
    /// keys are always written.
    pub fn insert_fields(&self, entity: &E, fields: &[&str]) -> Result<Insert, Error> {
        let key_count = self.key_count();
        let mut positions: Vec<usize> = (0..key_count).collect();

        if fields.is_empty() {
            positions.extend((key_count..self.fields().len()).filter(|&index| {
                !self
                    .field_value(entity, &self.fields()[index])
                    .is_null()
            }));
        } else {
            for name in fields {
                let canonical = remove_quotes(name)?;
                let index = self
                    .position(&canonical)
                    .ok_or_else(|| SchemaError::UnknownField {
                        table: self.table().to_string(),
                        field: (*name).to_string(),
                    })?;

                if !positions.contains(&index) {
                    positions.push(index);
                }
            }
        }

        let mut insert = Insert::new(self.table());
        for index in positions {
            insert = insert.value(
                self.columns()[index].clone(),
                self.field_value(entity, &self.fields()[index]),
            );
        }
        trace!(table = self.table(), columns = insert.columns.len(), "built partial insert");

        Ok(insert)
    }

    /// Update the row keyed by `entity`.
    ///
    /// Assignments are used verbatim; with none, every non-key field is set
    /// from the entity.
    #[must_use]
    pub fn update(&self, entity: &E, assignments: Vec<Assignment>) -> Update {
        let assignments = if assignments.is_empty() {
            let key_count = self.key_count();

            self.regular_fields()
                .iter()
                .zip(&self.columns()[key_count..])
                .map(|(field, column)| Assignment::set(column.clone(), self.field_value(entity, field)))
                .collect()
        } else {
            assignments
        };
        trace!(table = self.table(), assignments = assignments.len(), "built update");

        Update {
            assignments,
            clauses: self.entity_key_clauses(entity),
            ..Update::new(self.table())
        }
    }

    // ------------------------------------------------------------------
    // Key clauses
    // ------------------------------------------------------------------

    /// Equality terms for a caller-supplied key prefix, converted through
    /// the outbound chain with each key field's declared type.
    fn key_clauses(&self, keys: &[Value]) -> Result<Vec<Clause>, Error> {
        if keys.len() > self.key_count() {
            return Err(ArgumentError::TooManyKeyValues {
                table: self.table().to_string(),
                supplied: keys.len(),
                declared: self.key_count(),
            }
            .into());
        }

        let clauses = keys
            .iter()
            .zip(self.key_fields())
            .zip(self.columns())
            .map(|((value, field), column)| {
                let value = self
                    .converters()
                    .convert_out(&field.field_type(), value.clone());

                Clause::eq(column.clone(), value)
            })
            .collect();

        Ok(clauses)
    }

    fn entity_key_clauses(&self, entity: &E) -> Vec<Clause> {
        self.key_fields()
            .iter()
            .zip(self.columns())
            .map(|(field, column)| Clause::eq(column.clone(), self.field_value(entity, field)))
            .collect()
    }

    fn select_with_clauses(&self, clauses: Vec<Clause>) -> Select {
        Select {
            clauses,
            ..self.select_all()
        }
    }
}
