//! Row grouping and table construction.

use crate::{
    build::Builder,
    decode::{
        decode_field, decode_index, decode_language, decode_parameter, decode_schema,
        decode_sequence, decode_table, decode_table_space,
    },
    error::CompileError,
    model::{field::Field, relation::TableRef, types::FieldType},
    obs::{DiagnosticKind, Phase, Recorder},
    row::{MetaRow, ObjectType},
};
use std::{
    collections::{BTreeMap, BTreeSet},
    ops::Range,
};

/// Sort rows, locate the schema row, and build every table with its
/// fields, indexes and empty relation slots.
pub(super) fn group<'r>(
    rows: &'r [MetaRow],
    recorder: &mut Recorder<'_>,
) -> Result<Builder<'r>, CompileError> {
    let mut sorted: Vec<&MetaRow> = rows.iter().collect();
    sorted.sort_by(|a, b| {
        a.reference_id
            .cmp(&b.reference_id)
            .then_with(|| a.name.cmp(&b.name))
    });

    let schema = sorted
        .iter()
        .find_map(|row| decode_schema(row))
        .ok_or(CompileError::SchemaRowMissing { rows: rows.len() })?;

    let spans = member_spans(&sorted);
    recorder.phase(Phase::Group, spans.len());

    let mut builder = Builder {
        relation_slots: vec![None; sorted.len()],
        rows: sorted,
        tables: BTreeMap::new(),
        schema,
    };

    build_tables(&mut builder, &spans, recorder);
    report_dangling_members(&builder, &spans, recorder);
    decode_records(&mut builder, recorder);

    Ok(builder)
}

// Range of the sorted view covering each table's member rows. Other row
// kinds sharing a reference id may sit inside a range; readers filter.
fn member_spans(rows: &[&MetaRow]) -> BTreeMap<i32, Range<usize>> {
    let mut spans: BTreeMap<i32, Range<usize>> = BTreeMap::new();

    for (pos, row) in rows.iter().enumerate() {
        if !row.kind().is_table_member() {
            continue;
        }

        spans
            .entry(row.reference_id)
            .and_modify(|span| span.end = pos + 1)
            .or_insert(pos..pos + 1);
    }

    spans
}

fn build_tables(
    builder: &mut Builder<'_>,
    spans: &BTreeMap<i32, Range<usize>>,
    recorder: &mut Recorder<'_>,
) {
    for pos in 0..builder.rows.len() {
        let row = builder.rows[pos];
        let this = TableRef(u32::try_from(builder.schema.tables.len()).unwrap_or(u32::MAX));
        let Some(mut table) = decode_table(row, this) else {
            continue;
        };

        if builder.tables.contains_key(&table.id) {
            recorder.diagnose(
                DiagnosticKind::MalformedRow,
                row.id,
                format!("duplicate table id {} ('{}'), row ignored", table.id, table.name),
            );
            continue;
        }

        let mut fields = Vec::new();
        let mut indexes = Vec::new();
        let mut relation_names: BTreeSet<&str> = BTreeSet::new();
        let mut slots = 0_u32;

        let span = spans.get(&table.id).cloned().unwrap_or_default();
        for member_pos in span {
            let member = builder.rows[member_pos];
            if member.reference_id != table.id {
                continue;
            }

            match member.kind() {
                ObjectType::Field => {
                    if let Some(field) = decode_field(member) {
                        if field.ty == FieldType::Undefined {
                            recorder.diagnose(
                                DiagnosticKind::UnknownFieldType,
                                member.id,
                                format!(
                                    "field '{}.{}' has unknown type code {}",
                                    table.name, member.name, member.data_type
                                ),
                            );
                        }
                        fields.push(canonical_field(field));
                    }
                }
                ObjectType::Index => {
                    if let Some(index) = decode_index(member) {
                        if index.columns.is_empty() {
                            recorder.diagnose(
                                DiagnosticKind::MalformedRow,
                                member.id,
                                format!("index '{}.{}' lists no columns", table.name, index.name),
                            );
                        }
                        indexes.push(index);
                    }
                }
                ObjectType::Relation => {
                    if !relation_names.insert(member.name.as_str()) {
                        recorder.diagnose(
                            DiagnosticKind::MalformedRow,
                            member.id,
                            format!(
                                "duplicate relation name '{}.{}', row ignored",
                                table.name, member.name
                            ),
                        );
                        continue;
                    }
                    builder.relation_slots[member_pos] = Some(slots);
                    slots += 1;
                }
                _ => {}
            }
        }

        recorder.report.fields += fields.len() as u64;
        recorder.report.indexes += indexes.len() as u64;

        table.set_fields(fields);
        table.set_indexes(indexes);
        builder.tables.insert(table.id, this);
        builder.schema.tables.push(table);
    }

    let schema = &mut builder.schema;
    let mut by_id: Vec<TableRef> = schema.tables.iter().map(|t| t.this).collect();
    by_id.sort_by_key(|&t| schema.tables[t.index()].id);

    let mut by_name = by_id.clone();
    by_name.sort_by(|&a, &b| schema.tables[a.index()].name.cmp(&schema.tables[b.index()].name));

    schema.tables_by_id = by_id;
    schema.tables_by_name = by_name;

    recorder.report.tables = schema.tables.len() as u64;
    recorder.phase(Phase::Tables, schema.tables.len());
}

// Swap a decoded integer `id` field for the canonical primary-key field of
// the same width.
fn canonical_field(field: Field) -> Field {
    if field.is_primary_key_candidate() {
        Field::primary_key(field.ty).unwrap_or(field)
    } else {
        field
    }
}

fn report_dangling_members(
    builder: &Builder<'_>,
    spans: &BTreeMap<i32, Range<usize>>,
    recorder: &mut Recorder<'_>,
) {
    for (table_id, span) in spans {
        if builder.tables.contains_key(table_id) {
            continue;
        }

        for row in &builder.rows[span.clone()] {
            if row.reference_id == *table_id && row.kind().is_table_member() {
                recorder.diagnose(
                    DiagnosticKind::DanglingReference,
                    row.id,
                    format!(
                        "{} '{}' references unknown table {table_id}, row dropped",
                        row.kind(),
                        row.name
                    ),
                );
            }
        }
    }
}

// Attribute records plus leniency reporting for rows nothing consumes.
fn decode_records(builder: &mut Builder<'_>, recorder: &mut Recorder<'_>) {
    let schema = &mut builder.schema;

    for row in &builder.rows {
        match row.kind() {
            ObjectType::Tablespace => schema.tablespaces.extend(decode_table_space(row)),
            ObjectType::Sequence => schema.sequences.extend(decode_sequence(row)),
            ObjectType::Language => schema.languages.extend(decode_language(row)),
            ObjectType::Parameter => schema.parameters.extend(decode_parameter(row)),
            ObjectType::Undefined => recorder.diagnose(
                DiagnosticKind::UnknownEntityKind,
                row.id,
                format!("row '{}' has unknown object type {}", row.name, row.object_type),
            ),
            _ => {}
        }
    }
}
