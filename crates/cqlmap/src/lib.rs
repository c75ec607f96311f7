//! ## Crate layout
//! - `schema`: explicit per-type schema description (what `#[derive(Entity)]` emits).
//! - `registry`: derives and caches one descriptor per mapped type.
//! - `model`: descriptors, field accessors and declared field types.
//! - `convert`: the inbound/outbound value converter chain.
//! - `statement`: select/insert/update/delete descriptions and their rendering.
//! - `decode`: raw rows into typed instances.
//! - `session`: entity-level operations over an `Executor`.
//!
//! The `prelude` module carries the vocabulary most callers need.

pub use cqlmap_core::{
    CLUSTERING_KEY_OFFSET, Error, config, convert, decode, error, model, quotes, registry, schema,
    session, statement, traits, types, value,
};
pub use cqlmap_derive::{Entity, OrdinalEnum};

/// re-exports
///
/// derive output and callers can reach these without adding them to their
/// own Cargo.toml
pub mod __reexports {
    pub use uuid;
}

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    // derive macros; the traits of the same name follow
    pub use crate::{Entity, OrdinalEnum};

    pub use crate::{
        decode::{Cell, Row},
        registry::SchemaRegistry,
        session::{Executor, ResultSet, Session},
        statement::{Assignment, Clause, Ordering, Statement},
        traits::{Entity, FieldValue, OrdinalEnum},
        types::Timestamp,
        value::{Value, WireType},
    };
    pub use uuid::Uuid;
}
