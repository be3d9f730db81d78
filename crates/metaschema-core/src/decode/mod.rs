//! Module: decode
//! Responsibility: one metadata row in, at most one typed entity out.
//! Does not own: grouping rows by table or resolving references between
//! entities (see `build`).
//! Boundary: every decoder returns `None` for rows of another object type
//! and never panics on malformed input.

#[cfg(test)]
mod tests;

use crate::{
    codec::{bit, read_bit, read_field_size, read_relation_kind, read_type_code},
    model::{
        catalog::{Language, Parameter, Sequence, TableSpace},
        field::{ColumnRole, Field},
        index::Index,
        relation::{Relation, RelationRef, TableRef},
        schema::Schema,
        table::Table,
        types::{FieldType, Provider, RelationKind, TableKind},
    },
    row::{MetaRow, ObjectType},
};

/// Decode a field row.
#[must_use]
pub fn decode_field(row: &MetaRow) -> Option<Field> {
    if !row.is(ObjectType::Field) {
        return None;
    }

    let ty = FieldType::from_code(read_type_code(row.data_type));
    let not_null = read_bit(row.flags, bit::FIELD_NOT_NULL);
    let default_value = match row.trimmed_value() {
        Some(value) => Some(value.to_string()),
        None if not_null => ty.implicit_default().map(ToString::to_string),
        None => None,
    };

    Some(Field {
        id: row.id,
        name: row.name.clone(),
        description: row.description.clone(),
        ty,
        size: read_field_size(row.flags),
        default_value,
        active: row.active,
        case_sensitive: read_bit(row.flags, bit::FIELD_CASE_SENSITIVE),
        not_null,
        multilingual: read_bit(row.flags, bit::FIELD_MULTILINGUAL),
        baseline: read_bit(row.flags, bit::BASELINE),
        role: ColumnRole::Data,
    })
}

/// Decode a relation row. The caller resolves the target table (the row's
/// `data_type`) and the slot the relation will occupy.
#[must_use]
pub fn decode_relation(row: &MetaRow, this: RelationRef, target: TableRef) -> Option<Relation> {
    if !row.is(ObjectType::Relation) {
        return None;
    }

    let mut relation = Relation::new(
        row.id,
        row.name.clone(),
        decode_relation_kind(row),
        this,
        target,
    );
    relation.description.clone_from(&row.description);
    relation.active = row.active;
    relation.not_null = read_bit(row.flags, bit::RELATION_NOT_NULL);
    relation.constraint = read_bit(row.flags, bit::RELATION_CONSTRAINT);
    relation.baseline = read_bit(row.flags, bit::BASELINE);

    Some(relation)
}

/// Relation kind held in the row's flag word.
#[must_use]
pub const fn decode_relation_kind(row: &MetaRow) -> RelationKind {
    RelationKind::from_code(read_relation_kind(row.flags))
}

/// Name of the inverse relation on the target table, if the row names one.
#[must_use]
pub fn decode_inverse_name(row: &MetaRow) -> Option<&str> {
    if row.is(ObjectType::Relation) {
        row.trimmed_value()
    } else {
        None
    }
}

#[must_use]
pub fn decode_index(row: &MetaRow) -> Option<Index> {
    if !row.is(ObjectType::Index) {
        return None;
    }

    Some(Index {
        id: row.id,
        name: row.name.clone(),
        description: row.description.clone(),
        columns: row
            .value
            .as_deref()
            .map(Index::parse_columns)
            .unwrap_or_default(),
        unique: read_bit(row.flags, bit::INDEX_UNIQUE),
        bitmap: read_bit(row.flags, bit::INDEX_BITMAP),
        active: row.active,
        baseline: read_bit(row.flags, bit::BASELINE),
    })
}

/// Decode a table row into an empty table at arena position `this`.
#[must_use]
pub fn decode_table(row: &MetaRow, this: TableRef) -> Option<Table> {
    if !row.is(ObjectType::Table) {
        return None;
    }

    let kind = TableKind::from_code(read_type_code(row.data_type));
    let mut table = Table::new(row.id, row.name.clone(), kind, this);
    if let Some(physical) = row.trimmed_value() {
        table.physical_name = physical.to_string();
    }
    table.description.clone_from(&row.description);
    table.active = row.active;
    table.baseline = read_bit(row.flags, bit::BASELINE);
    table.cached = read_bit(row.flags, bit::TABLE_CACHED);
    table.readonly = read_bit(row.flags, bit::TABLE_READONLY);

    Some(table)
}

#[must_use]
pub fn decode_table_space(row: &MetaRow) -> Option<TableSpace> {
    if !row.is(ObjectType::Tablespace) {
        return None;
    }

    Some(TableSpace {
        id: row.id,
        name: row.name.clone(),
        description: row.description.clone(),
        file_name: row.trimmed_value().map(ToString::to_string),
        index: read_bit(row.flags, bit::TABLESPACE_INDEX),
        table: read_bit(row.flags, bit::TABLESPACE_TABLE),
        active: row.active,
    })
}

/// Decode a sequence row. An unparsable start value starts at zero.
#[must_use]
pub fn decode_sequence(row: &MetaRow) -> Option<Sequence> {
    if !row.is(ObjectType::Sequence) {
        return None;
    }

    Some(Sequence {
        id: row.id,
        name: row.name.clone(),
        description: row.description.clone(),
        start: row
            .trimmed_value()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default(),
        active: row.active,
    })
}

#[must_use]
pub fn decode_language(row: &MetaRow) -> Option<Language> {
    if !row.is(ObjectType::Language) {
        return None;
    }

    Some(Language {
        id: row.id,
        name: row.name.clone(),
        description: row.description.clone(),
        code: row.trimmed_value().map(ToString::to_string),
        active: row.active,
    })
}

#[must_use]
pub fn decode_parameter(row: &MetaRow) -> Option<Parameter> {
    if !row.is(ObjectType::Parameter) {
        return None;
    }

    Some(Parameter {
        id: row.id,
        name: row.name.clone(),
        description: row.description.clone(),
        value: row.value.clone(),
        reference_id: row.reference_id,
        active: row.active,
    })
}

/// Decode the schema row into an empty schema.
#[must_use]
pub fn decode_schema(row: &MetaRow) -> Option<Schema> {
    if !row.is(ObjectType::Schema) {
        return None;
    }

    let mut schema = Schema::new(row.id, row.name.clone(), Provider::from_code(row.data_type));
    schema.description.clone_from(&row.description);

    Some(schema)
}
