//! Schema-level attribute records that are not graph nodes.

use serde::Serialize;

///
/// TableSpace
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TableSpace {
    pub id: i32,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Holds index segments.
    pub index: bool,
    /// Holds table segments.
    pub table: bool,
    pub active: bool,
}

///
/// Sequence
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Sequence {
    pub id: i32,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub start: i64,
    pub active: bool,
}

///
/// Language
/// A content language available to multilingual fields.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Language {
    pub id: i32,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    pub active: bool,
}

///
/// Parameter
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Parameter {
    pub id: i32,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Row id of the object this parameter belongs to.
    pub reference_id: i32,
    pub active: bool,
}
