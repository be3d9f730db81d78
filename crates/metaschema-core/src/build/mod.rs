//! Module: build
//! Responsibility: compile a flat metadata row list into a linked `Schema`.
//! Does not own: per-row decoding (see `decode`) or integrity checks over a
//! finished graph (see `validate`).
//! Boundary: the only place a `Schema` is mutated.
//!
//! Passes, in order:
//! 1. `group`     sort rows, find the schema row, build tables.
//! 2. `link`      fill relation slots, then resolve inverses.
//! 3. `junction`  route many-to-many relations through junction tables.
//! 4. `columns`   compute physical column order per table.

mod columns;
mod group;
mod junction;
mod link;


pub use junction::{JUNCTION_STUB_LEN, JUNCTION_TABLE_ID, JunctionEndpoint, junction_stub_name};

use crate::{
    error::CompileError,
    model::{relation::TableRef, schema::Schema},
    naming::{PhysicalNamer, PrefixNamer},
    obs::{CompileReport, CompileSink, Recorder, TracingSink},
    row::MetaRow,
    validate::validate_schema,
};
use std::collections::BTreeMap;

static DEFAULT_NAMER: PrefixNamer = PrefixNamer {
    prefix: String::new(),
    max_len: None,
};

static DEFAULT_SINK: TracingSink = TracingSink;

/// Compile rows with default options.
pub fn compile(rows: &[MetaRow]) -> Result<Schema, CompileError> {
    Compiler::new().compile(rows).map(|compilation| compilation.schema)
}

///
/// Compilation
///

#[derive(Debug)]
pub struct Compilation {
    pub schema: Schema,
    pub report: CompileReport,
}

///
/// Compiler
///
/// Compile options: junction naming, event sink, and whether the integrity
/// pass runs (and fails the compile) afterwards.
///

#[derive(Clone, Copy)]
pub struct Compiler<'a> {
    namer: &'a dyn PhysicalNamer,
    sink: &'a dyn CompileSink,
    strict: bool,
}

impl Default for Compiler<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler<'static> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            namer: &DEFAULT_NAMER,
            sink: &DEFAULT_SINK,
            strict: false,
        }
    }
}

impl<'a> Compiler<'a> {
    #[must_use]
    pub fn with_namer<'b>(self, namer: &'b dyn PhysicalNamer) -> Compiler<'b>
    where
        'a: 'b,
    {
        Compiler {
            namer,
            sink: self.sink,
            strict: self.strict,
        }
    }

    #[must_use]
    pub fn with_sink<'b>(self, sink: &'b dyn CompileSink) -> Compiler<'b>
    where
        'a: 'b,
    {
        Compiler {
            namer: self.namer,
            sink,
            strict: self.strict,
        }
    }

    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn compile(&self, rows: &[MetaRow]) -> Result<Compilation, CompileError> {
        let mut recorder = Recorder::new(self.sink, rows.len());

        let mut builder = group::group(rows, &mut recorder)?;
        link::assign_relations(&mut builder, &mut recorder);
        link::link_inverses(&builder, &mut recorder);
        junction::synthesize(&mut builder, self.namer, &mut recorder);
        columns::map_columns(&mut builder.schema, &recorder);

        let schema = builder.schema;
        let report = recorder.finish();

        if self.strict {
            validate_schema(&schema).map_err(CompileError::Validation)?;
        }

        Ok(Compilation { schema, report })
    }
}

///
/// Builder
///
/// Working state shared by the passes. `rows` is the sorted row view;
/// `tables` maps a table row id to its arena position.
///

pub(crate) struct Builder<'r> {
    pub(crate) rows: Vec<&'r MetaRow>,
    pub(crate) tables: BTreeMap<i32, TableRef>,
    pub(crate) relation_slots: Vec<Option<u32>>,
    pub(crate) schema: Schema,
}

impl Builder<'_> {
    /// Arena position of the table with row id `id`.
    pub(crate) fn table_ref(&self, id: i32) -> Option<TableRef> {
        self.tables.get(&id).copied()
    }
}
