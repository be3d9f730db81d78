use derive_more::{Deref, IntoIterator};
use serde::Serialize;

///
/// StorageRole
/// Whether a schema member occupies a physical storage column.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum StorageRole {
    Column,
    Virtual,
}

///
/// Columnar
///
/// Shared surface of fields and relations consumed by the column mapper.
///

pub trait Columnar {
    fn id(&self) -> i32;

    fn name(&self) -> &str;

    fn storage_role(&self) -> StorageRole;
}

///
/// Column
///
/// One physical column: either a field (position in the table's
/// name-sorted field array) or a to-one relation (slot in the table's
/// relation array) holding the target row id.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Column {
    Field(usize),
    Relation(usize),
}

///
/// ColumnMap
/// Physical column order of one table, indexed by logical position.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq, Serialize)]
pub struct ColumnMap(Vec<Column>);

impl ColumnMap {
    #[must_use]
    pub(crate) const fn new(columns: Vec<Column>) -> Self {
        Self(columns)
    }

    /// Logical position of a field.
    #[must_use]
    pub fn position_of_field(&self, field: usize) -> Option<usize> {
        self.0.iter().position(|c| *c == Column::Field(field))
    }

    /// Logical position of a relation slot.
    #[must_use]
    pub fn position_of_relation(&self, slot: usize) -> Option<usize> {
        self.0.iter().position(|c| *c == Column::Relation(slot))
    }
}
