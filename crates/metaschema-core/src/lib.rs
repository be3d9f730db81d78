//! Metadata schema compiler: decodes flat metadata rows, links tables,
//! relations and inverses into a read-only `Schema`, and synthesizes the
//! junction tables behind many-to-many relations.

// public exports are one module level down
pub mod build;
pub mod codec;
pub mod decode;
pub mod error;
pub mod model;
pub mod naming;
pub mod obs;
pub mod publish;
pub mod row;
pub mod validate;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use build::{Compilation, Compiler, compile};
pub use error::{CompileError, ErrorTree};

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No compiler options, sinks, or decoders are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{
            field::Field,
            index::Index,
            relation::{Relation, RelationRef, TableRef},
            schema::Schema,
            table::Table,
            types::{FieldType, Provider, RelationKind, TableKind},
        },
        row::MetaRow,
    };
}
