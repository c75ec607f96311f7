use crate::{
    convert::ConverterChain,
    model::{accessor::FieldAccessor, field::ColumnName, field::FieldType},
    value::Value,
};
use std::{
    any::TypeId,
    collections::{BTreeMap, HashMap},
    fmt,
    sync::Arc,
};

///
/// FieldDescriptor
/// One mapped field: column name, key number (if any), and accessor.
///

pub struct FieldDescriptor<E> {
    column: ColumnName,
    key_number: Option<u32>,
    accessor: FieldAccessor<E>,
}

impl<E: 'static> FieldDescriptor<E> {
    pub(crate) const fn new(
        column: ColumnName,
        key_number: Option<u32>,
        accessor: FieldAccessor<E>,
    ) -> Self {
        Self {
            column,
            key_number,
            accessor,
        }
    }

    #[must_use]
    pub const fn column(&self) -> &ColumnName {
        &self.column
    }

    /// Key number in the unified ordering space (clustering keys offset).
    #[must_use]
    pub const fn key_number(&self) -> Option<u32> {
        self.key_number
    }

    #[must_use]
    pub const fn is_key(&self) -> bool {
        self.key_number.is_some()
    }

    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        self.accessor.field_type()
    }

    #[must_use]
    pub const fn accessor(&self) -> &FieldAccessor<E> {
        &self.accessor
    }
}

///
/// EntityDescriptor
///
/// Immutable schema of one mapped type, derived once by the registry.
///
/// Invariants:
/// - at least one key field
/// - `fields` and `columns` are parallel
/// - the first `key_count()` fields are the keys in ascending key number
///

pub struct EntityDescriptor<E> {
    entity_path: &'static str,
    table: String,
    fields: Vec<FieldDescriptor<E>>,
    keys: BTreeMap<u32, String>,
    columns: Vec<String>,
    positions: HashMap<String, usize>,
    converters: Arc<ConverterChain>,
}

impl<E: 'static> EntityDescriptor<E> {
    /// Assemble a descriptor from fields already in key-then-regular order.
    pub(crate) fn new(
        table: String,
        fields: Vec<FieldDescriptor<E>>,
        keys: BTreeMap<u32, String>,
        converters: Arc<ConverterChain>,
    ) -> Self {
        let columns = fields
            .iter()
            .map(|field| field.column.wire().to_string())
            .collect();
        let positions = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.column.canonical().to_string(), index))
            .collect();

        Self {
            entity_path: std::any::type_name::<E>(),
            table,
            fields,
            keys,
            columns,
            positions,
            converters,
        }
    }

    #[must_use]
    pub fn entity_type(&self) -> TypeId {
        TypeId::of::<E>()
    }

    #[must_use]
    pub const fn entity_path(&self) -> &'static str {
        self.entity_path
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Wire column names, parallel to `fields()`.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor<E>] {
        &self.fields
    }

    /// Key number → canonical column name, in key order.
    #[must_use]
    pub const fn keys(&self) -> &BTreeMap<u32, String> {
        &self.keys
    }

    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn key_fields(&self) -> &[FieldDescriptor<E>] {
        &self.fields[..self.key_count()]
    }

    #[must_use]
    pub fn regular_fields(&self) -> &[FieldDescriptor<E>] {
        &self.fields[self.key_count()..]
    }

    /// Position of the field with canonical column `name`.
    #[must_use]
    pub fn position(&self, canonical: &str) -> Option<usize> {
        self.positions.get(canonical).copied()
    }

    #[must_use]
    pub fn field(&self, canonical: &str) -> Option<&FieldDescriptor<E>> {
        self.position(canonical).map(|index| &self.fields[index])
    }

    #[must_use]
    pub fn converters(&self) -> &ConverterChain {
        &self.converters
    }

    /// Current value of one field after outbound conversion.
    #[must_use]
    pub fn field_value(&self, entity: &E, field: &FieldDescriptor<E>) -> Value {
        let raw = field.accessor.get(entity);

        self.converters.convert_out(&field.field_type(), raw)
    }

    /// Outbound values of every field, parallel to `columns()`.
    #[must_use]
    pub fn values(&self, entity: &E) -> Vec<Value> {
        self.fields
            .iter()
            .map(|field| self.field_value(entity, field))
            .collect()
    }

    /// Outbound values of the key fields, in key order.
    #[must_use]
    pub fn key_values(&self, entity: &E) -> Vec<Value> {
        self.key_fields()
            .iter()
            .map(|field| self.field_value(entity, field))
            .collect()
    }
}

impl<E> fmt::Debug for EntityDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityDescriptor")
            .field("entity", &self.entity_path)
            .field("table", &self.table)
            .field("keys", &self.keys)
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}
