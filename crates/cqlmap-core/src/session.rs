//! Entity-level convenience operations over an `Executor`.
//!
//! A `Session` resolves descriptors through its registry, builds statements,
//! hands them to the executor, and decodes the rows that come back. It adds
//! no behaviour of its own beyond that wiring.

use crate::{
    decode::Row,
    error::{AccessError, Error},
    model::{
        entity::EntityDescriptor,
        field::{FieldKind, FieldType},
    },
    registry::SchemaRegistry,
    statement::{Assignment, Delete, Insert, Select, Statement, Update},
    traits::Entity,
    value::Value,
};
use std::sync::Arc;
use tracing::debug;

const APPLIED_COLUMN: &str = "[applied]";

///
/// Executor
///
/// The execution collaborator: runs one statement and returns its rows.
/// Transport, consistency and retries are its business.
///

pub trait Executor {
    type Error: std::error::Error + Send + Sync + 'static;

    fn execute(&self, statement: &Statement) -> Result<ResultSet, Self::Error>;
}

impl<X: Executor + ?Sized> Executor for &X {
    type Error = X::Error;

    fn execute(&self, statement: &Statement) -> Result<ResultSet, Self::Error> {
        (**self).execute(statement)
    }
}

///
/// ResultSet
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResultSet {
    rows: Vec<Row>,
}

impl ResultSet {
    #[must_use]
    pub const fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    #[must_use]
    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Outcome of a conditional write: the boolean in the first column of
    /// the first row. No row, or a null cell, reads as not applied.
    pub fn was_applied(&self) -> Result<bool, Error> {
        let Some(cell) = self.first().and_then(|row| row.cells().first()) else {
            return Ok(false);
        };

        match cell.value()? {
            Value::Bool(applied) => Ok(applied),
            Value::Null => Ok(false),
            other => Err(AccessError::TypeMismatch {
                field: APPLIED_COLUMN.to_string(),
                expected: FieldType::new(FieldKind::Bool),
                found: format!("{} {other}", other.label()),
            }
            .into()),
        }
    }
}

impl FromIterator<Row> for ResultSet {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

///
/// Session
///

pub struct Session<X> {
    executor: X,
    registry: Arc<SchemaRegistry>,
}

impl<X: Executor> Session<X> {
    /// Session with its own default registry.
    #[must_use]
    pub fn new(executor: X) -> Self {
        Self::with_registry(executor, Arc::new(SchemaRegistry::new()))
    }

    /// Session sharing `registry` (and its converters) with other sessions.
    #[must_use]
    pub const fn with_registry(executor: X, registry: Arc<SchemaRegistry>) -> Self {
        Self { executor, registry }
    }

    #[must_use]
    pub const fn executor(&self) -> &X {
        &self.executor
    }

    #[must_use]
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn descriptor<E: Entity>(&self) -> Result<Arc<EntityDescriptor<E>>, Error> {
        self.registry.descriptor::<E>()
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    pub fn execute(&self, statement: impl Into<Statement>) -> Result<ResultSet, Error> {
        let statement = statement.into();
        debug!(
            kind = statement.kind(),
            table = statement.table(),
            "executing statement"
        );

        let result = self
            .executor
            .execute(&statement)
            .map_err(Error::execution)?;
        debug!(rows = result.len(), "statement executed");

        Ok(result)
    }

    /// Execute a conditional write and report whether it was applied.
    pub fn is_applied(&self, statement: impl Into<Statement>) -> Result<bool, Error> {
        self.execute(statement)?.was_applied()
    }

    // ---------------------------------------------------------------------
    // Reads
    // ---------------------------------------------------------------------

    /// Rows matching a key prefix.
    pub fn select<E: Entity>(&self, keys: &[Value]) -> Result<Vec<E>, Error> {
        self.select_with(keys, std::convert::identity)
    }

    /// Like `select`, with the statement customised before execution.
    pub fn select_with<E: Entity>(
        &self,
        keys: &[Value],
        customize: impl FnOnce(Select) -> Select,
    ) -> Result<Vec<E>, Error> {
        let descriptor = self.descriptor::<E>()?;
        let select = customize(descriptor.select(keys)?);

        self.fetch(&descriptor, select)
    }

    pub fn select_all<E: Entity>(&self) -> Result<Vec<E>, Error> {
        self.select_all_with(std::convert::identity)
    }

    pub fn select_all_with<E: Entity>(
        &self,
        customize: impl FnOnce(Select) -> Select,
    ) -> Result<Vec<E>, Error> {
        let descriptor = self.descriptor::<E>()?;
        let select = customize(descriptor.select_all());

        self.fetch(&descriptor, select)
    }

    /// First row matching a key prefix.
    pub fn select_one<E: Entity>(&self, keys: &[Value]) -> Result<Option<E>, Error> {
        self.select_one_with(keys, std::convert::identity)
    }

    /// Like `select_one`, with the statement customised before execution.
    pub fn select_one_with<E: Entity>(
        &self,
        keys: &[Value],
        customize: impl FnOnce(Select) -> Select,
    ) -> Result<Option<E>, Error> {
        let descriptor = self.descriptor::<E>()?;
        let result = self.execute(customize(descriptor.select(keys)?))?;

        result
            .first()
            .map(|row| descriptor.decode_row(row))
            .transpose()
    }

    /// Stored state of the row keyed by `entity`, or `entity` itself when no
    /// such row exists.
    pub fn reload<E: Entity>(&self, entity: E) -> Result<E, Error> {
        let descriptor = self.descriptor::<E>()?;
        let result = self.execute(descriptor.select_entity(&entity))?;

        match result.first() {
            Some(row) => descriptor.decode_row(row),
            None => Ok(entity),
        }
    }

    // ---------------------------------------------------------------------
    // Writes
    // ---------------------------------------------------------------------

    pub fn insert<E: Entity>(&self, entity: &E) -> Result<ResultSet, Error> {
        self.insert_with(entity, std::convert::identity)
    }

    pub fn insert_with<E: Entity>(
        &self,
        entity: &E,
        customize: impl FnOnce(Insert) -> Insert,
    ) -> Result<ResultSet, Error> {
        let insert = self.descriptor::<E>()?.insert(entity);

        self.execute(customize(insert))
    }

    /// Insert the keys plus the named fields; see
    /// `EntityDescriptor::insert_fields` for the empty-list rule.
    pub fn insert_fields<E: Entity>(&self, entity: &E, fields: &[&str]) -> Result<ResultSet, Error> {
        let insert = self.descriptor::<E>()?.insert_fields(entity, fields)?;

        self.execute(insert)
    }

    pub fn update<E: Entity>(
        &self,
        entity: &E,
        assignments: Vec<Assignment>,
    ) -> Result<ResultSet, Error> {
        self.update_with(entity, assignments, std::convert::identity)
    }

    pub fn update_with<E: Entity>(
        &self,
        entity: &E,
        assignments: Vec<Assignment>,
        customize: impl FnOnce(Update) -> Update,
    ) -> Result<ResultSet, Error> {
        let update = self.descriptor::<E>()?.update(entity, assignments);

        self.execute(customize(update))
    }

    // ---------------------------------------------------------------------
    // Deletes
    // ---------------------------------------------------------------------

    /// Delete every row matching a key prefix.
    pub fn delete<E: Entity>(&self, keys: &[Value]) -> Result<ResultSet, Error> {
        self.delete_with::<E>(keys, std::convert::identity)
    }

    pub fn delete_with<E: Entity>(
        &self,
        keys: &[Value],
        customize: impl FnOnce(Delete) -> Delete,
    ) -> Result<ResultSet, Error> {
        let delete = self.descriptor::<E>()?.delete(keys)?;

        self.execute(customize(delete))
    }

    pub fn delete_entity<E: Entity>(&self, entity: &E) -> Result<ResultSet, Error> {
        let delete = self.descriptor::<E>()?.delete_entity(entity);

        self.execute(delete)
    }

    fn fetch<E: Entity>(
        &self,
        descriptor: &EntityDescriptor<E>,
        select: Select,
    ) -> Result<Vec<E>, Error> {
        self.execute(select)?
            .rows()
            .iter()
            .map(|row| descriptor.decode_row(row))
            .collect()
    }
}

///
/// TESTS
///
