use crate::model::{
    columns::{Columnar, StorageRole},
    types::RelationKind,
};
use derive_more::Display;
use serde::Serialize;
use std::sync::OnceLock;

///
/// TableRef
/// Arena position of a table inside its schema.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[display("table#{_0}")]
pub struct TableRef(pub(crate) u32);

impl TableRef {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

///
/// RelationRef
/// Address of a relation: owning table plus slot in its relation array.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[display("{table}/relation#{slot}")]
pub struct RelationRef {
    pub table: TableRef,
    pub slot: u32,
}

impl RelationRef {
    #[must_use]
    pub const fn new(table: TableRef, slot: u32) -> Self {
        Self { table, slot }
    }

    #[must_use]
    pub const fn slot_index(self) -> usize {
        self.slot as usize
    }
}

///
/// Relation
///
/// One directed association from the owning table to `target`. The
/// inverse slot is written at most once during linking; an unset slot
/// reads back as the relation itself.
///

#[derive(Clone, Debug)]
pub struct Relation {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub kind: RelationKind,
    pub active: bool,
    pub not_null: bool,
    pub constraint: bool,
    pub baseline: bool,

    pub(crate) this: RelationRef,
    pub(crate) target: TableRef,
    pub(crate) mtm_table: Option<TableRef>,
    inverse: OnceLock<RelationRef>,
}

impl Relation {
    #[must_use]
    pub(crate) fn new(
        id: i32,
        name: String,
        kind: RelationKind,
        this: RelationRef,
        target: TableRef,
    ) -> Self {
        Self {
            id,
            name,
            description: None,
            kind,
            active: true,
            not_null: false,
            constraint: false,
            baseline: false,
            this,
            target,
            mtm_table: None,
            inverse: OnceLock::new(),
        }
    }

    #[must_use]
    pub const fn this(&self) -> RelationRef {
        self.this
    }

    #[must_use]
    pub const fn target(&self) -> TableRef {
        self.target
    }

    /// Real table on the far side of a many-to-many relation that was
    /// rerouted through a junction table.
    #[must_use]
    pub const fn mtm_table(&self) -> Option<TableRef> {
        self.mtm_table
    }

    /// Table whose rows this relation ultimately reaches.
    #[must_use]
    pub fn far_table(&self) -> TableRef {
        self.mtm_table.unwrap_or(self.target)
    }

    #[must_use]
    pub fn inverse(&self) -> RelationRef {
        self.inverse.get().copied().unwrap_or(self.this)
    }

    #[must_use]
    pub fn has_inverse(&self) -> bool {
        self.inverse() != self.this
    }

    /// Write the inverse slot once. Returns `false` when the slot was
    /// already taken or `inverse` names this relation.
    pub(crate) fn assign_inverse(&self, inverse: RelationRef) -> bool {
        if inverse == self.this {
            return false;
        }

        self.inverse.set(inverse).is_ok()
    }

    pub(crate) fn rebase(&mut self, this: RelationRef) {
        self.this = this;
    }
}

impl Columnar for Relation {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn storage_role(&self) -> StorageRole {
        if self.kind.is_to_one() {
            StorageRole::Column
        } else {
            StorageRole::Virtual
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relation(slot: u32) -> Relation {
        Relation::new(
            1,
            "owner".to_string(),
            RelationKind::Mto,
            RelationRef::new(TableRef(0), slot),
            TableRef(1),
        )
    }

    #[test]
    fn unlinked_relation_is_its_own_inverse() {
        let r = relation(0);

        assert_eq!(r.inverse(), r.this());
        assert!(!r.has_inverse());
    }

    #[test]
    fn inverse_is_assigned_once() {
        let r = relation(0);
        let first = RelationRef::new(TableRef(1), 3);
        let second = RelationRef::new(TableRef(1), 4);

        assert!(r.assign_inverse(first));
        assert!(!r.assign_inverse(second));
        assert_eq!(r.inverse(), first);
    }

    #[test]
    fn self_assignment_leaves_slot_open() {
        let r = relation(2);

        assert!(!r.assign_inverse(r.this()));
        assert!(r.assign_inverse(RelationRef::new(TableRef(5), 0)));
    }

    #[test]
    fn only_to_one_relations_take_a_column() {
        let mut r = relation(0);
        assert_eq!(r.storage_role(), StorageRole::Column);

        r.kind = RelationKind::Otm;
        assert_eq!(r.storage_role(), StorageRole::Virtual);
    }

    #[test]
    fn refs_render_readably() {
        assert_eq!(RelationRef::new(TableRef(2), 7).to_string(), "table#2/relation#7");
    }
}
