//! Serializable views of a compiled schema for command output.

use metaschema_core::{
    model::{
        columns::Column,
        relation::Relation,
        schema::Schema,
        table::Table,
        types::{Provider, TableKind},
    },
    obs::{CompileReport, Diagnostic},
};
use serde::Serialize;
use std::fmt::{self, Display};

///
/// SchemaSummary
///

#[derive(Debug, Serialize)]
pub struct SchemaSummary {
    pub name: String,
    pub provider: Provider,
    pub tables: Vec<TableSummary>,
    pub junctions: Vec<JunctionSummary>,
    pub report: CompileReport,
}

impl SchemaSummary {
    pub fn new(schema: &Schema, report: CompileReport) -> Self {
        Self {
            name: schema.name.clone(),
            provider: schema.provider,
            tables: schema.tables().map(TableSummary::new).collect(),
            junctions: junctions(schema),
            report,
        }
    }
}

impl Display for SchemaSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "schema {} ({})", self.name, self.provider)?;
        for table in &self.tables {
            writeln!(f, "  {table}")?;
        }
        for junction in &self.junctions {
            writeln!(f, "  {junction}")?;
        }

        let report = &self.report;
        writeln!(
            f,
            "{} rows, {} tables, {} fields, {} relations, {} indexes, {} inverses, {} junctions",
            report.rows,
            report.tables,
            report.fields,
            report.relations,
            report.indexes,
            report.inverses_linked,
            report.junctions
        )?;
        for diagnostic in report.diagnostics.iter() {
            writeln!(f, "{}", DiagnosticLine(diagnostic))?;
        }

        Ok(())
    }
}

///
/// TableSummary
///

#[derive(Debug, Serialize)]
pub struct TableSummary {
    pub id: i32,
    pub name: String,
    pub physical_name: String,
    pub kind: TableKind,
    pub columns: Vec<String>,
    pub relations: usize,
    pub indexes: usize,
}

impl TableSummary {
    fn new(table: &Table) -> Self {
        let columns = table
            .column_map()
            .iter()
            .filter_map(|column| column_name(table, *column))
            .collect();

        Self {
            id: table.id,
            name: table.name.clone(),
            physical_name: table.physical_name.clone(),
            kind: table.kind,
            columns,
            relations: table.relations().len(),
            indexes: table.indexes().len(),
        }
    }
}

impl Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.name, self.id)?;
        if self.physical_name != self.name {
            write!(f, " as {}", self.physical_name)?;
        }

        write!(
            f,
            " [{}] ({}), {} relations, {} indexes",
            self.kind,
            self.columns.join(", "),
            self.relations,
            self.indexes
        )
    }
}

fn column_name(table: &Table, column: Column) -> Option<String> {
    match column {
        Column::Field(pos) => table.fields().get(pos).map(|f| f.name.clone()),
        Column::Relation(slot) => table.relation(slot).map(|r| r.name.clone()),
    }
}

///
/// JunctionSummary
///

#[derive(Debug, Serialize)]
pub struct JunctionSummary {
    pub physical_name: String,
    pub stub: String,
    pub endpoints: Vec<String>,
    pub index: Option<String>,
}

impl Display for JunctionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.physical_name, self.endpoints.join(" <-> "))?;
        if let Some(index) = &self.index {
            write!(f, " {index}")?;
        }

        Ok(())
    }
}

/// One entry per junction, endpoints named `table.relation`.
pub fn junctions(schema: &Schema) -> Vec<JunctionSummary> {
    schema
        .junctions()
        .map(|junction| JunctionSummary {
            physical_name: junction.physical_name.clone(),
            stub: junction.name.clone(),
            endpoints: junction
                .relations()
                .iter()
                .filter_map(|r| endpoint_name(schema, junction, r))
                .collect(),
            index: junction.indexes().first().map(ToString::to_string),
        })
        .collect()
}

// Junction relations carry the id of the endpoint relation they mirror.
fn endpoint_name(schema: &Schema, junction: &Table, relation: &Relation) -> Option<String> {
    schema.tables().find_map(|table| {
        table
            .relation_by_id(relation.id)
            .filter(|r| r.target() == junction.this())
            .map(|r| format!("{}.{}", table.name, r.name))
    })
}

///
/// DiagnosticLine
///

pub struct DiagnosticLine<'a>(pub &'a Diagnostic);

impl Display for DiagnosticLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Diagnostic {
            kind,
            row_id,
            message,
        } = self.0;

        write!(f, "warning[{kind}] row {row_id}: {message}")
    }
}
