//! Many-to-many junction synthesis.

use crate::{
    build::Builder,
    model::{
        index::Index,
        relation::{Relation, RelationRef, TableRef},
        table::Table,
        types::{RelationKind, TableKind},
    },
    naming::PhysicalNamer,
    obs::{DiagnosticKind, Phase, Recorder},
};
use std::collections::{BTreeMap, BTreeSet};

/// Table id carried by synthesized junction tables; they have no metadata row.
pub const JUNCTION_TABLE_ID: i32 = 0;

/// Length of every name produced by [`junction_stub_name`] for table ids up
/// to five digits and discriminators up to three.
pub const JUNCTION_STUB_LEN: usize = 15;

///
/// JunctionEndpoint
/// One side of a many-to-many pair: owning table id and relation id.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct JunctionEndpoint {
    pub table_id: i32,
    pub relation_id: i32,
}

/// Deterministic stub name for the junction between two endpoints.
///
/// Table ids are zero-padded to five digits, smaller first, followed by a
/// three-digit discriminator: the relation id of the endpoint owned by the
/// smaller table, or the smaller relation id when both endpoints share a
/// table. The result does not depend on argument order.
#[must_use]
pub fn junction_stub_name(a: JunctionEndpoint, b: JunctionEndpoint) -> String {
    let (first, second) = if a.table_id <= b.table_id { (a, b) } else { (b, a) };
    let discriminator = if first.table_id == second.table_id {
        first.relation_id.min(second.relation_id)
    } else {
        first.relation_id
    };

    format!(
        "{:05}_{:05}_{discriminator:03}",
        first.table_id, second.table_id
    )
}

// Attributes of one endpoint relation copied out before the arena grows.
struct EndpointCopy {
    this: RelationRef,
    id: i32,
    name: String,
    target: TableRef,
    active: bool,
    constraint: bool,
    baseline: bool,
}

impl EndpointCopy {
    fn of(relation: &Relation) -> Self {
        Self {
            this: relation.this(),
            id: relation.id,
            name: relation.name.clone(),
            target: relation.target(),
            active: relation.active,
            constraint: relation.constraint,
            baseline: relation.baseline,
        }
    }
}

/// Route every linked many-to-many pair through a junction table.
///
/// A pair whose physical name is already taken by another junction is
/// reported as malformed and left unrouted.
pub(super) fn synthesize(
    builder: &mut Builder<'_>,
    namer: &dyn PhysicalNamer,
    recorder: &mut Recorder<'_>,
) {
    let candidates: Vec<RelationRef> = builder
        .schema
        .relations()
        .filter(|r| r.kind == RelationKind::Mtm)
        .map(Relation::this)
        .collect();

    // stub -> junction, and physical name -> the stub that claimed it
    let mut built: BTreeMap<String, TableRef> = BTreeMap::new();
    let mut claimed: BTreeMap<String, String> = BTreeMap::new();
    let mut rejected: BTreeSet<String> = BTreeSet::new();

    for candidate in candidates {
        let Some((left, right)) = pair_of(builder, candidate, recorder) else {
            continue;
        };

        let schema = &builder.schema;
        let stub = junction_stub_name(
            JunctionEndpoint {
                table_id: schema.table(left.this.table).id,
                relation_id: left.id,
            },
            JunctionEndpoint {
                table_id: schema.table(right.this.table).id,
                relation_id: right.id,
            },
        );
        if rejected.contains(&stub) {
            continue;
        }

        let junction = if let Some(&junction) = built.get(&stub) {
            junction
        } else {
            let physical = namer.physical_name(&stub, schema);
            if let Some(owner) = claimed.get(&physical) {
                recorder.diagnose(
                    DiagnosticKind::MalformedRow,
                    left.id,
                    format!(
                        "junction '{stub}' for '{}.{}' maps to physical name '{physical}' \
                         already taken by junction '{owner}'",
                        schema.table(left.this.table).name,
                        left.name
                    ),
                );
                rejected.insert(stub);
                continue;
            }

            let junction = push_junction(builder, &stub, &physical, [&left, &right]);
            claimed.insert(physical, stub.clone());
            built.insert(stub, junction);
            junction
        };

        reroute(builder, left.this, junction);
        reroute(builder, right.this, junction);
    }

    let schema = &mut builder.schema;
    let mut junctions: Vec<TableRef> = built.into_values().collect();
    junctions.sort_by(|&a, &b| {
        schema.tables[a.index()]
            .physical_name
            .cmp(&schema.tables[b.index()].physical_name)
    });
    schema.junctions = junctions;

    recorder.report.junctions = schema.junctions.len() as u64;
    recorder.phase(Phase::Junctions, schema.junctions.len());
}

// Both endpoints of a many-to-many candidate that still needs a junction.
fn pair_of(
    builder: &Builder<'_>,
    candidate: RelationRef,
    recorder: &mut Recorder<'_>,
) -> Option<(EndpointCopy, EndpointCopy)> {
    let schema = &builder.schema;
    let relation = schema.relation(candidate)?;

    if schema.table(relation.target()).kind == TableKind::Mtm || !relation.has_inverse() {
        return None;
    }

    let inverse = schema.relation(relation.inverse())?;
    if inverse.kind != RelationKind::Mtm {
        recorder.diagnose(
            DiagnosticKind::MalformedRow,
            relation.id,
            format!(
                "many-to-many relation '{}.{}' has inverse '{}' of kind {}",
                schema.table(candidate.table).name,
                relation.name,
                inverse.name,
                inverse.kind
            ),
        );
        return None;
    }

    Some((EndpointCopy::of(relation), EndpointCopy::of(inverse)))
}

fn push_junction(
    builder: &mut Builder<'_>,
    stub: &str,
    physical: &str,
    endpoints: [&EndpointCopy; 2],
) -> TableRef {
    let schema = &mut builder.schema;
    let this = TableRef(u32::try_from(schema.tables.len()).unwrap_or(u32::MAX));

    let mut ordered = endpoints;
    ordered.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

    let mut table = Table::new(JUNCTION_TABLE_ID, stub.to_string(), TableKind::Mtm, this);
    table.physical_name = physical.to_string();
    table.active = ordered.iter().all(|e| e.active);
    table.baseline = ordered.iter().all(|e| e.baseline);

    table.relations = ordered
        .iter()
        .zip(0_u32..)
        .map(|(endpoint, slot)| {
            let mut relation = Relation::new(
                endpoint.id,
                endpoint.name.clone(),
                RelationKind::Mto,
                RelationRef::new(this, slot),
                endpoint.target,
            );
            relation.active = endpoint.active;
            relation.not_null = true;
            relation.constraint = endpoint.constraint;
            relation.baseline = endpoint.baseline;
            relation
        })
        .collect();

    let (first, second) = (&table.relations[0], &table.relations[1]);
    first.assign_inverse(second.this());
    second.assign_inverse(first.this());

    let baseline = table.baseline;
    table.set_indexes(vec![Index {
        id: JUNCTION_TABLE_ID,
        name: format!("uk_{stub}"),
        description: None,
        columns: ordered.iter().map(|e| e.name.clone()).collect(),
        unique: true,
        bitmap: false,
        active: true,
        baseline,
    }]);

    schema.tables.push(table);
    this
}

// Point an endpoint at the junction, remembering the real far table.
fn reroute(builder: &mut Builder<'_>, endpoint: RelationRef, junction: TableRef) {
    let Some(relation) = builder
        .schema
        .tables
        .get_mut(endpoint.table.index())
        .and_then(|t| t.relations.get_mut(endpoint.slot_index()))
    else {
        return;
    };

    if relation.mtm_table.is_none() {
        relation.mtm_table = Some(relation.target);
    }
    relation.target = junction;
}
