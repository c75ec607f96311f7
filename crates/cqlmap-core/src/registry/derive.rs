use crate::{
    config::MapperConfig,
    convert::ConverterChain,
    error::{Error, SchemaError},
    model::{
        entity::{EntityDescriptor, FieldDescriptor},
        field::ColumnName,
    },
    schema::{EntitySchema, FieldSchema},
    traits::Entity,
};
use std::{
    collections::{BTreeMap, HashSet},
    sync::Arc,
};

/// Derive the descriptor of `E` from its declared schema.
///
/// Touches no shared state; the registry publishes the result.
pub(crate) fn derive_descriptor<E: Entity>(
    config: &MapperConfig,
    converters: Arc<ConverterChain>,
) -> Result<EntityDescriptor<E>, Error> {
    let schema = E::schema();
    let entity = std::any::type_name::<E>();
    let table = resolve_table::<E>(&schema, config);

    let mut keys = BTreeMap::new();
    let mut key_fields = BTreeMap::new();
    let mut regular_fields = Vec::new();
    let mut seen_columns = HashSet::new();

    for field in schema.fields().iter().filter(|field| !field.is_skipped()) {
        let column = resolve_column(field)?;
        let canonical = column.canonical().to_string();

        if let Some(role) = field.key_role() {
            let number = role.number();
            if keys.contains_key(&number) {
                return Err(SchemaError::DuplicateKeyNumber {
                    entity: entity.to_string(),
                    number,
                }
                .into());
            }
            keys.insert(number, canonical.clone());
            key_fields.insert(
                number,
                FieldDescriptor::new(column, Some(number), field.accessor().clone()),
            );
        } else {
            regular_fields.push(FieldDescriptor::new(column, None, field.accessor().clone()));
        }

        if !seen_columns.insert(canonical.clone()) {
            return Err(SchemaError::DuplicateColumn {
                entity: entity.to_string(),
                column: canonical,
            }
            .into());
        }
    }

    if keys.is_empty() {
        return Err(SchemaError::NoKeys {
            entity: entity.to_string(),
        }
        .into());
    }

    let fields = key_fields.into_values().chain(regular_fields).collect();

    Ok(EntityDescriptor::new(table, fields, keys, converters))
}

/// Explicit override first, lower-cased simple type name otherwise; then
/// qualify with the schema keyspace or the configured default.
fn resolve_table<E: 'static>(schema: &EntitySchema<E>, config: &MapperConfig) -> String {
    let table = schema
        .table_override()
        .map_or_else(|| simple_type_name::<E>().to_lowercase(), str::to_string);

    // already qualified
    if table.contains('.') {
        return table;
    }

    match schema
        .keyspace_override()
        .or(config.default_keyspace.as_deref())
    {
        Some(keyspace) => format!("{keyspace}.{table}"),
        None => table,
    }
}

fn resolve_column<E: 'static>(field: &FieldSchema<E>) -> Result<ColumnName, Error> {
    let column = field.column_override();

    let resolved = match (&column.name, column.case_sensitive) {
        (Some(name), case_sensitive) => ColumnName::explicit(name, case_sensitive)?,
        (None, true) => ColumnName::explicit(field.name(), true)?,
        (None, false) => ColumnName::from_field(field.name()),
    };

    Ok(resolved)
}

fn simple_type_name<E>() -> &'static str {
    let path = std::any::type_name::<E>();
    let path = path.split_once('<').map_or(path, |(head, _)| head);

    path.rsplit("::").next().unwrap_or(path)
}
