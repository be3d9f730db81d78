//! Compiled schema graph.
//!
//! Types here are produced by `build` and consumed read-only by everything
//! downstream. Tables live in a single arena owned by `Schema`; relations
//! point at tables through `TableRef` and at each other through
//! `RelationRef`.

pub mod catalog;
pub mod columns;
pub mod field;
pub mod index;
pub mod relation;
pub mod schema;
pub mod table;
pub mod types;
