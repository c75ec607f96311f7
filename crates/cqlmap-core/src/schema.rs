//! Explicit schema description.
//!
//! An `EntitySchema` is what a type declares about itself: table override,
//! per-field column overrides, key roles, exclusions, and embedded
//! (flattened) parts. It is only read when the registry derives the
//! type's descriptor; afterwards the descriptor is authoritative.
//!
//! Precedence: an explicit override wins, the structural default
//! (lower-cased type or field name) applies otherwise.

use crate::{
    CLUSTERING_KEY_OFFSET,
    model::accessor::FieldAccessor,
    traits::{Entity, FieldValue},
};

///
/// KeyRole
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KeyRole {
    /// Generic key number, ordered like a partition key.
    Key(u32),
    Partition(u32),
    /// Ordered after every partition key by `CLUSTERING_KEY_OFFSET`.
    Clustering(u32),
}

impl KeyRole {
    /// Position in the unified key ordering space.
    #[must_use]
    pub const fn number(self) -> u32 {
        match self {
            Self::Key(n) | Self::Partition(n) => n,
            Self::Clustering(n) => n.saturating_add(CLUSTERING_KEY_OFFSET),
        }
    }
}

///
/// ColumnOverride
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ColumnOverride {
    pub name: Option<String>,
    pub case_sensitive: bool,
}

///
/// FieldSchema
///

pub struct FieldSchema<E> {
    name: String,
    column: ColumnOverride,
    key: Option<KeyRole>,
    skip: bool,
    accessor: FieldAccessor<E>,
}

impl<E: 'static> FieldSchema<E> {
    /// Describe field `name`, reached through the given lens functions.
    #[must_use]
    pub fn new<F>(name: &str, get: fn(&E) -> &F, get_mut: fn(&mut E) -> &mut F) -> Self
    where
        F: FieldValue + 'static,
    {
        Self::with_accessor(name, FieldAccessor::new(name, get, get_mut))
    }

    #[must_use]
    pub fn with_accessor(name: &str, accessor: FieldAccessor<E>) -> Self {
        Self {
            name: name.to_string(),
            column: ColumnOverride::default(),
            key: None,
            skip: false,
            accessor,
        }
    }

    /// Explicit column name; folded to lower case unless quoted or
    /// `case_sensitive`.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.column.name = Some(name.into());
        self
    }

    /// Quote the column on the wire, preserving its case.
    #[must_use]
    pub const fn case_sensitive(mut self) -> Self {
        self.column.case_sensitive = true;
        self
    }

    #[must_use]
    pub const fn key(mut self, number: u32) -> Self {
        self.key = Some(KeyRole::Key(number));
        self
    }

    #[must_use]
    pub const fn partition_key(mut self, number: u32) -> Self {
        self.key = Some(KeyRole::Partition(number));
        self
    }

    #[must_use]
    pub const fn clustering_key(mut self, number: u32) -> Self {
        self.key = Some(KeyRole::Clustering(number));
        self
    }

    /// Exclude the field from mapping.
    #[must_use]
    pub const fn skip(mut self) -> Self {
        self.skip = true;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn column_override(&self) -> &ColumnOverride {
        &self.column
    }

    #[must_use]
    pub const fn key_role(&self) -> Option<KeyRole> {
        self.key
    }

    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        self.skip
    }

    #[must_use]
    pub const fn accessor(&self) -> &FieldAccessor<E> {
        &self.accessor
    }

    fn nest<P: 'static>(self, lens: fn(&P) -> &E, lens_mut: fn(&mut P) -> &mut E) -> FieldSchema<P> {
        FieldSchema {
            name: self.name,
            column: self.column,
            key: self.key,
            skip: self.skip,
            accessor: self.accessor.nest(lens, lens_mut),
        }
    }
}

///
/// EntitySchema
///

pub struct EntitySchema<E> {
    table: Option<String>,
    keyspace: Option<String>,
    fields: Vec<FieldSchema<E>>,
}

impl<E: 'static> EntitySchema<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: None,
            keyspace: None,
            fields: Vec::new(),
        }
    }

    /// Explicit table name; an empty name keeps the structural default.
    #[must_use]
    pub fn table(mut self, name: impl Into<String>) -> Self {
        self.table = Some(name.into());
        self
    }

    #[must_use]
    pub fn keyspace(mut self, keyspace: impl Into<String>) -> Self {
        self.keyspace = Some(keyspace.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: FieldSchema<E>) -> Self {
        self.fields.push(field);
        self
    }

    /// Map the fields of an embedded part as if declared on this type.
    /// The part's own table and keyspace are ignored.
    #[must_use]
    pub fn flatten<P: Entity>(mut self, lens: fn(&E) -> &P, lens_mut: fn(&mut E) -> &mut P) -> Self {
        self.fields.extend(
            P::schema()
                .fields
                .into_iter()
                .map(|field| field.nest(lens, lens_mut)),
        );
        self
    }

    /// Non-empty table override.
    #[must_use]
    pub fn table_override(&self) -> Option<&str> {
        self.table.as_deref().filter(|name| !name.is_empty())
    }

    #[must_use]
    pub fn keyspace_override(&self) -> Option<&str> {
        self.keyspace.as_deref().filter(|name| !name.is_empty())
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldSchema<E>] {
        &self.fields
    }
}

impl<E: 'static> Default for EntitySchema<E> {
    fn default() -> Self {
        Self::new()
    }
}
