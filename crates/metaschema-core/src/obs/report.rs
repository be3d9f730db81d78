use derive_more::{Deref, Display, IntoIterator};
use serde::Serialize;

///
/// DiagnosticKind
///
/// Non-fatal compile findings. Each leaves the graph usable but partial.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum DiagnosticKind {
    /// A field, relation or index row names no known table, or a relation
    /// names no known target table.
    DanglingReference,
    /// A row of a known kind whose content cannot be used.
    MalformedRow,
    UnknownEntityKind,
    UnknownFieldType,
    UnknownRelationKind,
    /// The inverse named by a relation row could not be found.
    UnresolvedInverse,
}

///
/// Diagnostic
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub row_id: i32,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn new(kind: DiagnosticKind, row_id: i32, message: impl Into<String>) -> Self {
        Self {
            kind,
            row_id,
            message: message.into(),
        }
    }
}

///
/// Diagnostics
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq, Serialize)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    #[must_use]
    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.0.iter().filter(|d| d.kind == kind).count()
    }

    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(move |d| d.kind == kind)
    }
}

///
/// CompileReport
/// Counters and diagnostics gathered during one compile.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CompileReport {
    pub rows: u64,
    pub tables: u64,
    pub fields: u64,
    pub relations: u64,
    pub indexes: u64,
    pub inverses_linked: u64,
    pub junctions: u64,
    pub diagnostics: Diagnostics,
}

impl CompileReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
