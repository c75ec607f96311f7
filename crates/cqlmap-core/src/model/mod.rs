//! Runtime data model.
//!
//! Types here are the *derived* form of an entity schema: accessors bound
//! to concrete fields, declared field types, and the immutable per-type
//! descriptor that statement building and row decoding run against.
//!
//! In general:
//! - `schema` describes *what a type declares*
//! - `model` describes *what runs*
pub mod accessor;
pub mod entity;
pub mod field;
