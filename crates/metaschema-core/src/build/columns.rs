//! Physical column order.

use crate::{
    model::{
        columns::{Column, ColumnMap, Columnar, StorageRole},
        schema::Schema,
        table::Table,
    },
    obs::{Phase, Recorder},
};

/// Compute the column map of every table, junction tables included.
pub(super) fn map_columns(schema: &mut Schema, recorder: &Recorder<'_>) {
    for table in &mut schema.tables {
        table.columns = column_order(table);
    }

    recorder.phase(Phase::Columns, schema.tables.len());
}

/// Fields and to-one relations merged by ascending id; on equal ids the
/// field comes first.
pub(crate) fn column_order(table: &Table) -> ColumnMap {
    let fields = table
        .fields
        .iter()
        .enumerate()
        .map(|(pos, f)| (Column::Field(pos), f as &dyn Columnar));
    let relations = table
        .relations
        .iter()
        .enumerate()
        .map(|(slot, r)| (Column::Relation(slot), r as &dyn Columnar));

    let mut columns: Vec<(Column, &dyn Columnar)> = fields
        .chain(relations)
        .filter(|(_, member)| member.storage_role() == StorageRole::Column)
        .collect();

    columns.sort_by_key(|(column, member)| (member.id(), matches!(column, Column::Relation(_))));

    ColumnMap::new(columns.into_iter().map(|(column, _)| column).collect())
}
