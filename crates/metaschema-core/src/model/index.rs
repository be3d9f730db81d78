use serde::Serialize;
use std::fmt::{self, Display};

/// Delimiter between column names in an index row's value.
pub const INDEX_COLUMN_DELIMITER: char = ';';

///
/// Index
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Index {
    pub id: i32,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub columns: Vec<String>,
    pub unique: bool,
    pub bitmap: bool,
    pub active: bool,
    pub baseline: bool,
}

impl Index {
    /// Split a persisted column list into ordered column names.
    #[must_use]
    pub fn parse_columns(value: &str) -> Vec<String> {
        value
            .split(INDEX_COLUMN_DELIMITER)
            .map(str::trim)
            .filter(|column| !column.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Persisted form of the column list.
    #[must_use]
    pub fn joined_columns(&self) -> String {
        self.columns.join(&INDEX_COLUMN_DELIMITER.to_string())
    }

    #[must_use]
    pub fn covers(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.columns.join(", ");

        if self.unique {
            write!(f, "{} UNIQUE ({columns})", self.name)
        } else {
            write!(f, "{} ({columns})", self.name)
        }
    }
}
