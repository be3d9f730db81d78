//! Metadata rows: the flat, denormalized wire unit the compiler consumes.

mod build;

pub use build::{FieldSpec, IndexSpec, RelationSpec};

use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// ObjectType
///
/// Discriminator carried by every metadata row. Tag values are part of the
/// persisted format and must not change.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum ObjectType {
    Table = 0,
    Field = 1,
    Relation = 2,
    Index = 3,
    Schema = 7,
    Sequence = 15,
    Language = 17,
    Tablespace = 18,
    Parameter = 23,
    Alias = 25,
    Constraint = 101,
    Undefined = 255,
}

impl ObjectType {
    #[must_use]
    pub const fn from_tag(tag: u8) -> Self {
        match tag {
            0 => Self::Table,
            1 => Self::Field,
            2 => Self::Relation,
            3 => Self::Index,
            7 => Self::Schema,
            15 => Self::Sequence,
            17 => Self::Language,
            18 => Self::Tablespace,
            23 => Self::Parameter,
            25 => Self::Alias,
            101 => Self::Constraint,
            _ => Self::Undefined,
        }
    }

    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Row kinds that hang off a table and are grouped by `reference_id`.
    #[must_use]
    pub const fn is_table_member(self) -> bool {
        matches!(self, Self::Field | Self::Relation | Self::Index)
    }
}

///
/// MetaRow
///
/// One persisted metadata record. `flags` and `data_type` are interpreted
/// according to `object_type`.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MetaRow {
    pub id: i32,

    #[serde(default)]
    pub schema_id: i32,

    pub object_type: u8,
    pub reference_id: i32,

    #[serde(default)]
    pub data_type: i32,

    #[serde(default)]
    pub flags: i64,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl MetaRow {
    #[must_use]
    pub const fn kind(&self) -> ObjectType {
        ObjectType::from_tag(self.object_type)
    }

    #[must_use]
    pub fn is(&self, kind: ObjectType) -> bool {
        self.kind() == kind
    }

    /// Row value with surrounding whitespace removed; empty values read as absent.
    #[must_use]
    pub fn trimmed_value(&self) -> Option<&str> {
        self.value
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}
