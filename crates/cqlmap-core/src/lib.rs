//! Core runtime for cqlmap: entity schemas, descriptors, the converter chain,
//! statement builders, row decoding, and the session facade.
#![warn(unreachable_pub)]

extern crate self as cqlmap;

// public exports are one module level down
pub mod config;
pub mod convert;
pub mod decode;
pub mod error;
pub mod model;
pub mod quotes;
pub mod registry;
pub mod schema;
pub mod session;
pub mod statement;
pub mod traits;
pub mod types;
pub mod value;

#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Offset added to clustering key numbers so they always sort after
/// partition key numbers within one ordering space.
///
/// A type declaring this many partition keys or more collides with its own
/// clustering keys; the limit is documented rather than enforced.
pub const CLUSTERING_KEY_OFFSET: u32 = 1000;

// re-exports
pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No executors, registries, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{entity::EntityDescriptor, field::FieldType},
        schema::{EntitySchema, FieldSchema},
        statement::{Assignment, Clause, Statement},
        traits::{Entity, FieldValue, OrdinalEnum},
        value::{Value, WireType},
    };
}
