//! Row decoding.
//!
//! A row arrives as (column name, wire type, raw bytes) cells. Cells whose
//! column the descriptor maps are decoded per wire type, run through the
//! inbound converter chain, and stored through the field setter. A null left
//! over for a field that cannot hold null leaves the field at its default.
//! Cells the descriptor does not know are ignored.

use crate::{
    error::{CodecError, Error},
    model::entity::{EntityDescriptor, FieldDescriptor},
    quotes::{is_quoted, remove_quotes},
    traits::Entity,
    value::{Value, WireType},
};
use tracing::warn;

///
/// Cell
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    pub name: String,
    pub wire_type: WireType,
    /// `None` for a null cell.
    pub bytes: Option<Vec<u8>>,
}

impl Cell {
    #[must_use]
    pub fn new(name: impl Into<String>, wire_type: WireType, bytes: Option<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            wire_type,
            bytes,
        }
    }

    /// Encode a wire-side value into a cell.
    pub fn encode(
        name: impl Into<String>,
        wire_type: WireType,
        value: &Value,
    ) -> Result<Self, CodecError> {
        Ok(Self::new(name, wire_type, wire_type.encode(value)?))
    }

    /// Decoded wire value, `Null` for a null cell.
    pub fn value(&self) -> Result<Value, CodecError> {
        decode_bytes(self.wire_type, self.bytes.as_deref())
    }
}

///
/// Row
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    #[must_use]
    pub const fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    #[must_use]
    pub fn with(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<E: Entity> EntityDescriptor<E> {
    /// Build a fresh instance from raw cells.
    pub fn decode<'a, I>(&self, cells: I) -> Result<E, Error>
    where
        I: IntoIterator<Item = (&'a str, WireType, Option<&'a [u8]>)>,
    {
        let mut entity = E::default();
        let mut unknown = 0usize;

        for (name, wire_type, bytes) in cells {
            let Some(field) = self.lookup_column(name) else {
                unknown += 1;
                continue;
            };

            let raw = decode_bytes(wire_type, bytes)?;
            let field_type = field.field_type();
            let value = self.converters().convert_in(wire_type, raw, &field_type);

            // an unwritten column reads back null; a field that cannot hold
            // null keeps its default
            if value.is_null() && !field_type.nullable {
                continue;
            }

            field.accessor().set(&mut entity, value)?;
        }

        if unknown > 0 {
            warn!(
                table = self.table(),
                unknown, "row carries columns the entity does not map; ignored"
            );
        }

        Ok(entity)
    }

    pub fn decode_row(&self, row: &Row) -> Result<E, Error> {
        self.decode(
            row.cells()
                .iter()
                .map(|cell| (cell.name.as_str(), cell.wire_type, cell.bytes.as_deref())),
        )
    }

    fn lookup_column(&self, name: &str) -> Option<&FieldDescriptor<E>> {
        if is_quoted(name) {
            let canonical = remove_quotes(name).ok()?;
            return self.field(&canonical);
        }

        self.field(name)
    }
}

fn decode_bytes(wire_type: WireType, bytes: Option<&[u8]>) -> Result<Value, CodecError> {
    bytes.map_or(Ok(Value::Null), |bytes| wire_type.decode(bytes))
}

///
/// TESTS
///
