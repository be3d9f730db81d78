//! Integrity pass over a compiled schema.
//!
//! Compilation is lenient; callers that need strict guarantees run this
//! pass (or compile in strict mode) and act on the returned tree.

use crate::{
    err,
    error::ErrorTree,
    model::{
        relation::Relation,
        schema::Schema,
        table::Table,
        types::{RelationKind, TableKind},
    },
};
use std::collections::{BTreeMap, BTreeSet};

/// Run every integrity check in a fixed order.
pub fn validate_schema(schema: &Schema) -> Result<(), ErrorTree> {
    let mut errs = ErrorTree::new();

    validate_table_keys(schema, &mut errs);
    validate_sorted(schema, &mut errs);

    for table in schema.all_tables() {
        let mut table_errs = ErrorTree::new();

        validate_members(table, &mut table_errs);
        validate_relations(schema, table, &mut table_errs);
        if table.is_junction() {
            validate_junction(table, &mut table_errs);
        }

        errs.merge_for(table.name.clone(), table_errs);
    }

    errs.result()
}

// Table ids and names must be unique among metadata tables.
fn validate_table_keys(schema: &Schema, errs: &mut ErrorTree) {
    let mut ids = BTreeMap::new();
    let mut names = BTreeMap::new();

    for table in schema.tables() {
        if let Some(prev) = ids.insert(table.id, table.name.as_str()) {
            err!(
                errs,
                "duplicate table id {} for '{prev}' and '{}'",
                table.id,
                table.name
            );
        }
        if let Some(prev) = names.insert(table.name.as_str(), table.id) {
            err!(
                errs,
                "duplicate table name '{}' for ids {prev} and {}",
                table.name,
                table.id
            );
        }
    }
}

fn validate_sorted(schema: &Schema, errs: &mut ErrorTree) {
    let ids: Vec<i32> = schema.tables().map(|t| t.id).collect();
    if !ids.is_sorted() {
        err!(errs, "table id index is not sorted");
    }

    let names: Vec<&str> = schema
        .tables_by_name
        .iter()
        .map(|&t| schema.table(t).name.as_str())
        .collect();
    if !names.is_sorted() {
        err!(errs, "table name index is not sorted");
    }
}

fn validate_members(table: &Table, errs: &mut ErrorTree) {
    let mut seen = BTreeSet::new();
    for field in table.fields() {
        if !seen.insert(field.name.as_str()) {
            err!(errs, "duplicate field name '{}'", field.name);
        }
    }
    if !table.fields().is_sorted_by(|a, b| a.name <= b.name) {
        err!(errs, "field index is not sorted");
    }

    let mut seen = BTreeSet::new();
    for relation in table.relations() {
        if !seen.insert(relation.name.as_str()) {
            err!(errs, "duplicate relation name '{}'", relation.name);
        }
    }

    for index in table.indexes() {
        if index.columns.is_empty() {
            errs.add_for(index.name.clone(), "index has no columns");
        }
        for column in &index.columns {
            if !table.has_column(column) {
                errs.add_for(
                    index.name.clone(),
                    format!("index column '{column}' is neither a field nor a to-one relation"),
                );
            }
        }
    }
}

fn validate_relations(schema: &Schema, table: &Table, errs: &mut ErrorTree) {
    for relation in table.relations() {
        let route = relation.name.clone();

        if relation.kind == RelationKind::Undefined {
            errs.add_for(route.clone(), "relation kind is undefined");
        }

        if !schema.is_initialized(relation) {
            errs.add_for(route.clone(), uninitialized_reason(schema, relation));
            continue;
        }

        match schema.inverse_of(relation) {
            Some(inverse) if inverse.inverse() == relation.this() => {}
            Some(inverse) => errs.add_for(
                route.clone(),
                format!(
                    "inverse '{}' does not point back (points to {})",
                    inverse.name,
                    inverse.inverse()
                ),
            ),
            None => errs.add_for(route.clone(), "inverse reference is dangling"),
        }

        if relation.kind == RelationKind::Mtm && !table.is_junction() {
            let target = schema.target_of(relation);
            if target.kind != TableKind::Mtm {
                errs.add_for(
                    route,
                    format!("many-to-many target '{}' is not a junction table", target.name),
                );
            }
        }
    }
}

fn uninitialized_reason(schema: &Schema, relation: &Relation) -> String {
    if relation.has_inverse() {
        format!(
            "many-to-many relation is not routed through a junction table (target '{}')",
            schema.target_of(relation).name
        )
    } else {
        "relation has no inverse".to_string()
    }
}

// Exactly two Mto relations and one unique index over both of them.
fn validate_junction(table: &Table, errs: &mut ErrorTree) {
    let relations = table.relations();
    if relations.len() != 2 {
        err!(errs, "junction table has {} relations, expected 2", relations.len());
    }
    if relations.iter().any(|r| r.kind != RelationKind::Mto) {
        err!(errs, "junction table relations must all be many-to-one");
    }

    let unique: Vec<_> = table.indexes().iter().filter(|i| i.unique).collect();
    match unique.as_slice() {
        [index] if index.columns.len() == 2 => {}
        [index] => err!(
            errs,
            "junction index '{}' covers {} columns, expected 2",
            index.name,
            index.columns.len()
        ),
        _ => err!(
            errs,
            "junction table has {} unique indexes, expected 1",
            unique.len()
        ),
    }
}
