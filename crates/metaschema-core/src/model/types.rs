use derive_more::Display;
use serde::Serialize;

///
/// FieldType
///
/// Storage type of a field, encoded in the low seven bits of the row's
/// type word.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
pub enum FieldType {
    Int64,
    Int32,
    Int16,
    Int8,
    Float32,
    Float64,
    String,
    ShortDateTime,
    DateTime,
    LongDateTime,
    ByteArray,
    LongString,
    Undefined,
}

impl FieldType {
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Int64,
            1 => Self::Int32,
            2 => Self::Int16,
            3 => Self::Int8,
            14 => Self::Float32,
            15 => Self::Float64,
            16 => Self::String,
            17 => Self::ShortDateTime,
            18 => Self::DateTime,
            19 => Self::LongDateTime,
            21 => Self::ByteArray,
            27 => Self::LongString,
            _ => Self::Undefined,
        }
    }

    /// Wire code; `None` for `Undefined`, which has no stable encoding.
    #[must_use]
    pub const fn code(self) -> Option<u8> {
        match self {
            Self::Int64 => Some(0),
            Self::Int32 => Some(1),
            Self::Int16 => Some(2),
            Self::Int8 => Some(3),
            Self::Float32 => Some(14),
            Self::Float64 => Some(15),
            Self::String => Some(16),
            Self::ShortDateTime => Some(17),
            Self::DateTime => Some(18),
            Self::LongDateTime => Some(19),
            Self::ByteArray => Some(21),
            Self::LongString => Some(27),
            Self::Undefined => None,
        }
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Int64 | Self::Int32 | Self::Int16 | Self::Int8)
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.is_integer() || matches!(self, Self::Float32 | Self::Float64)
    }

    /// Implicit default for a not-null field whose row carries none.
    #[must_use]
    pub const fn implicit_default(self) -> Option<&'static str> {
        if self.is_numeric() { Some("0") } else { None }
    }
}

///
/// RelationKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
pub enum RelationKind {
    /// many-to-one
    Mto,
    /// one-to-many
    Otm,
    /// many-to-many
    Mtm,
    /// one-to-one, primary side
    Otop,
    /// one-to-one, foreign side
    Otof,
    Undefined,
}

impl RelationKind {
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Mto,
            2 => Self::Otm,
            3 => Self::Mtm,
            4 => Self::Otop,
            5 => Self::Otof,
            _ => Self::Undefined,
        }
    }

    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Mto => 1,
            Self::Otm => 2,
            Self::Mtm => 3,
            Self::Otop => 4,
            Self::Otof => 5,
            Self::Undefined => 0,
        }
    }

    /// Relations that hold the foreign key on this side and so occupy a column.
    #[must_use]
    pub const fn is_to_one(self) -> bool {
        matches!(self, Self::Mto | Self::Otop)
    }
}

///
/// TableKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
pub enum TableKind {
    Business,
    /// Junction table materializing a many-to-many relation.
    Mtm,
    Fake,
    Meta,
    MetaId,
    Log,
    Undefined,
}

impl TableKind {
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Business,
            1 => Self::Mtm,
            2 => Self::Fake,
            3 => Self::Meta,
            4 => Self::MetaId,
            5 => Self::Log,
            _ => Self::Undefined,
        }
    }

    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Business => 0,
            Self::Mtm => 1,
            Self::Fake => 2,
            Self::Meta => 3,
            Self::MetaId => 4,
            Self::Log => 5,
            Self::Undefined => 127,
        }
    }
}

///
/// Provider
/// Database provider a schema is bound to.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
pub enum Provider {
    Undefined,
    Postgres,
    SqlServer,
    Oracle,
    MySql,
    Sqlite,
}

impl Provider {
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Postgres,
            2 => Self::SqlServer,
            3 => Self::Oracle,
            4 => Self::MySql,
            5 => Self::Sqlite,
            _ => Self::Undefined,
        }
    }

    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Undefined => 0,
            Self::Postgres => 1,
            Self::SqlServer => 2,
            Self::Oracle => 3,
            Self::MySql => 4,
            Self::Sqlite => 5,
        }
    }
}
