//! Relation linking: slot assignment, then inverse resolution.

use crate::{
    build::Builder,
    decode::{decode_inverse_name, decode_relation},
    model::{
        relation::{Relation, RelationRef},
        types::RelationKind,
    },
    obs::{DiagnosticKind, Phase, Recorder},
    row::ObjectType,
};

/// Construct every relation into its owning table's slot. Relations whose
/// target table is unknown are dropped and the remaining slots compacted.
pub(super) fn assign_relations(builder: &mut Builder<'_>, recorder: &mut Recorder<'_>) {
    let mut slots: Vec<Vec<Option<Relation>>> = builder
        .schema
        .tables
        .iter()
        .map(|_| Vec::new())
        .collect();

    for (pos, row) in builder.rows.iter().enumerate() {
        if !row.is(ObjectType::Relation) {
            continue;
        }
        let (Some(owner), Some(slot)) = (
            builder.table_ref(row.reference_id),
            builder.relation_slots[pos],
        ) else {
            continue;
        };

        let table_slots = &mut slots[owner.index()];
        if table_slots.len() <= slot as usize {
            table_slots.resize_with(slot as usize + 1, || None);
        }

        let Some(target) = builder.table_ref(row.data_type) else {
            recorder.diagnose(
                DiagnosticKind::DanglingReference,
                row.id,
                format!(
                    "relation '{}' targets unknown table {}, row dropped",
                    row.name, row.data_type
                ),
            );
            continue;
        };

        let Some(relation) = decode_relation(row, RelationRef::new(owner, slot), target) else {
            continue;
        };
        if relation.kind == RelationKind::Undefined {
            recorder.diagnose(
                DiagnosticKind::UnknownRelationKind,
                row.id,
                format!("relation '{}' has an unknown kind", row.name),
            );
        }

        table_slots[slot as usize] = Some(relation);
    }

    let mut assigned = 0;
    for (table, table_slots) in builder.schema.tables.iter_mut().zip(slots) {
        let owner = table.this;
        table.relations = table_slots
            .into_iter()
            .flatten()
            .enumerate()
            .map(|(slot, mut relation)| {
                relation.rebase(RelationRef::new(
                    owner,
                    u32::try_from(slot).unwrap_or(u32::MAX),
                ));
                relation
            })
            .collect();
        assigned += table.relations.len();
    }

    recorder.report.relations = assigned as u64;
    recorder.phase(Phase::Relations, assigned);
}

/// Resolve each relation's inverse by name in its target table and link
/// both directions. Slots already written are left untouched.
pub(super) fn link_inverses(builder: &Builder<'_>, recorder: &mut Recorder<'_>) {
    let schema = &builder.schema;
    let mut linked = 0;

    for (row, slot) in builder.rows.iter().zip(&builder.relation_slots) {
        // Rows without a slot were rejected during grouping.
        if !row.is(ObjectType::Relation) || slot.is_none() {
            continue;
        }
        let Some(owner) = builder.table_ref(row.reference_id) else {
            continue;
        };
        let owner_table = schema.table(owner);
        let Some(relation) = owner_table.relation_by_name(&row.name) else {
            continue;
        };

        let Some(inverse_name) = decode_inverse_name(row) else {
            recorder.diagnose(
                DiagnosticKind::UnresolvedInverse,
                row.id,
                format!(
                    "relation '{}.{}' names no inverse",
                    owner_table.name, relation.name
                ),
            );
            continue;
        };

        let target_table = schema.table(relation.target());
        let Some(inverse) = target_table.relation_by_name(inverse_name) else {
            recorder.diagnose(
                DiagnosticKind::UnresolvedInverse,
                row.id,
                format!(
                    "relation '{}.{}' names inverse '{}.{inverse_name}', which does not exist",
                    owner_table.name, relation.name, target_table.name
                ),
            );
            continue;
        };

        if inverse.this() == relation.this() {
            recorder.diagnose(
                DiagnosticKind::UnresolvedInverse,
                row.id,
                format!(
                    "relation '{}.{}' names itself as inverse",
                    owner_table.name, relation.name
                ),
            );
            continue;
        }

        if inverse.target() != owner {
            recorder.diagnose(
                DiagnosticKind::UnresolvedInverse,
                row.id,
                format!(
                    "relation '{}.{}' names inverse '{}.{}', which targets another table",
                    owner_table.name, relation.name, target_table.name, inverse.name
                ),
            );
            continue;
        }

        let forward = relation.assign_inverse(inverse.this());
        let backward = inverse.assign_inverse(relation.this());
        if forward || backward {
            linked += 1;
        }
    }

    recorder.report.inverses_linked = linked as u64;
    recorder.phase(Phase::Inverses, linked);
}
