use crate::model::{
    catalog::{Language, Parameter, Sequence, TableSpace},
    relation::{Relation, RelationRef, TableRef},
    table::Table,
    types::{Provider, RelationKind, TableKind},
};

///
/// Schema
///
/// Sole owner of every table (junction tables included) in one arena.
/// Relations and inverse links address tables through `TableRef`, so the
/// graph's cycles never need shared ownership. A compiled schema is
/// read-only; `tables_by_id`, `tables_by_name` and `junctions` stay sorted.
///

#[derive(Clone, Debug)]
pub struct Schema {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub provider: Provider,

    pub(crate) tables: Vec<Table>,
    pub(crate) tables_by_id: Vec<TableRef>,
    pub(crate) tables_by_name: Vec<TableRef>,
    pub(crate) junctions: Vec<TableRef>,
    pub(crate) parameters: Vec<Parameter>,
    pub(crate) tablespaces: Vec<TableSpace>,
    pub(crate) sequences: Vec<Sequence>,
    pub(crate) languages: Vec<Language>,
}

impl Schema {
    #[must_use]
    pub(crate) const fn new(id: i32, name: String, provider: Provider) -> Self {
        Self {
            id,
            name,
            description: None,
            provider,
            tables: Vec::new(),
            tables_by_id: Vec::new(),
            tables_by_name: Vec::new(),
            junctions: Vec::new(),
            parameters: Vec::new(),
            tablespaces: Vec::new(),
            sequences: Vec::new(),
            languages: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Arena access
    // ------------------------------------------------------------------

    /// Table at an arena position. Refs handed out by this schema always resolve.
    ///
    /// # Panics
    ///
    /// Panics when `table` came from a different schema with fewer tables,
    /// such as a snapshot replaced by `SchemaCell::publish`. Use
    /// [`Schema::try_table`] for refs that may outlive their schema.
    #[must_use]
    pub fn table(&self, table: TableRef) -> &Table {
        &self.tables[table.index()]
    }

    /// Table at an arena position, or `None` for a ref this schema never
    /// handed out.
    #[must_use]
    pub fn try_table(&self, table: TableRef) -> Option<&Table> {
        self.tables.get(table.index())
    }

    #[must_use]
    pub fn relation(&self, relation: RelationRef) -> Option<&Relation> {
        self.try_table(relation.table)?
            .relation(relation.slot_index())
    }

    /// Every table in the arena, junction tables included.
    pub fn all_tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    /// Metadata tables in ascending id order (junction tables excluded).
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables_by_id.iter().map(|&t| self.table(t))
    }

    /// Synthesized junction tables in physical-name order.
    pub fn junctions(&self) -> impl Iterator<Item = &Table> {
        self.junctions.iter().map(|&t| self.table(t))
    }

    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.tables.iter().flat_map(|t| t.relations.iter())
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    #[must_use]
    pub fn table_by_id(&self, id: i32) -> Option<&Table> {
        self.tables_by_id
            .binary_search_by_key(&id, |&t| self.table(t).id)
            .ok()
            .map(|pos| self.table(self.tables_by_id[pos]))
    }

    #[must_use]
    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables_by_name
            .binary_search_by(|&t| self.table(t).name.as_str().cmp(name))
            .ok()
            .map(|pos| self.table(self.tables_by_name[pos]))
    }

    #[must_use]
    pub fn table_by_name_ignore_case(&self, name: &str) -> Option<&Table> {
        self.tables_by_name
            .iter()
            .map(|&t| self.table(t))
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn junction_by_physical_name(&self, physical_name: &str) -> Option<&Table> {
        self.junctions
            .binary_search_by(|&t| self.table(t).physical_name.as_str().cmp(physical_name))
            .ok()
            .map(|pos| self.table(self.junctions[pos]))
    }

    /// Inverse of `relation`; the relation itself while unlinked.
    #[must_use]
    pub fn inverse_of(&self, relation: &Relation) -> Option<&Relation> {
        self.relation(relation.inverse())
    }

    /// Target table of `relation`.
    #[must_use]
    pub fn target_of(&self, relation: &Relation) -> &Table {
        self.table(relation.target())
    }

    /// A relation is initialized once it has an inverse and, when
    /// many-to-many, has been routed through a junction table.
    #[must_use]
    pub fn is_initialized(&self, relation: &Relation) -> bool {
        relation.has_inverse()
            && (relation.kind != RelationKind::Mtm
                || self
                    .try_table(relation.target())
                    .is_some_and(|t| t.kind == TableKind::Mtm))
    }

    // ------------------------------------------------------------------
    // Attribute records
    // ------------------------------------------------------------------

    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn tablespaces(&self) -> &[TableSpace] {
        &self.tablespaces
    }

    #[must_use]
    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    #[must_use]
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    #[must_use]
    pub fn table_count(&self) -> usize {
        self.tables_by_id.len()
    }

    #[must_use]
    pub fn junction_count(&self) -> usize {
        self.junctions.len()
    }
}
