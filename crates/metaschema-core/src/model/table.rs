use crate::model::{
    columns::ColumnMap,
    field::Field,
    index::Index,
    relation::{Relation, TableRef},
    types::TableKind,
};

///
/// Table
///
/// Fields and indexes are sorted by name for binary search; `field_ids`
/// holds field positions ordered by field id. Relations keep slot order.
/// None of these arrays change once the owning schema is compiled.
///

#[derive(Clone, Debug)]
pub struct Table {
    pub id: i32,
    pub name: String,
    pub physical_name: String,
    pub description: Option<String>,
    pub kind: TableKind,
    pub active: bool,
    pub baseline: bool,
    pub cached: bool,
    pub readonly: bool,

    pub(crate) this: TableRef,
    pub(crate) fields: Vec<Field>,
    pub(crate) field_ids: Vec<usize>,
    pub(crate) relations: Vec<Relation>,
    pub(crate) indexes: Vec<Index>,
    pub(crate) columns: ColumnMap,
}

impl Table {
    #[must_use]
    pub(crate) fn new(id: i32, name: String, kind: TableKind, this: TableRef) -> Self {
        Self {
            id,
            physical_name: name.clone(),
            name,
            description: None,
            kind,
            active: true,
            baseline: false,
            cached: false,
            readonly: false,
            this,
            fields: Vec::new(),
            field_ids: Vec::new(),
            relations: Vec::new(),
            indexes: Vec::new(),
            columns: ColumnMap::default(),
        }
    }

    /// Install fields, sorting them by name and rebuilding the id index.
    pub(crate) fn set_fields(&mut self, mut fields: Vec<Field>) {
        fields.sort_by(|a, b| a.name.cmp(&b.name));

        let mut field_ids: Vec<usize> = (0..fields.len()).collect();
        field_ids.sort_by_key(|&pos| fields[pos].id);

        self.fields = fields;
        self.field_ids = field_ids;
    }

    pub(crate) fn set_indexes(&mut self, mut indexes: Vec<Index>) {
        indexes.sort_by(|a, b| a.name.cmp(&b.name));
        self.indexes = indexes;
    }

    #[must_use]
    pub const fn this(&self) -> TableRef {
        self.this
    }

    #[must_use]
    pub const fn is_junction(&self) -> bool {
        matches!(self.kind, TableKind::Mtm)
    }

    // ------------------------------------------------------------------
    // Fields
    // ------------------------------------------------------------------

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Fields in ascending id order.
    pub fn fields_by_id(&self) -> impl Iterator<Item = &Field> {
        self.field_ids.iter().map(|&pos| &self.fields[pos])
    }

    #[must_use]
    pub fn field_position(&self, name: &str) -> Option<usize> {
        self.fields
            .binary_search_by(|f| f.name.as_str().cmp(name))
            .ok()
    }

    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.field_position(name).map(|pos| &self.fields[pos])
    }

    #[must_use]
    pub fn field_by_id(&self, id: i32) -> Option<&Field> {
        self.field_ids
            .binary_search_by_key(&id, |&pos| self.fields[pos].id)
            .ok()
            .map(|slot| &self.fields[self.field_ids[slot]])
    }

    #[must_use]
    pub fn field_by_name_ignore_case(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// The table's primary-key field, if it has one.
    #[must_use]
    pub fn primary_key(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.is_primary_key())
    }

    // ------------------------------------------------------------------
    // Relations
    // ------------------------------------------------------------------

    #[must_use]
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    #[must_use]
    pub fn relation(&self, slot: usize) -> Option<&Relation> {
        self.relations.get(slot)
    }

    #[must_use]
    pub fn relation_by_name(&self, name: &str) -> Option<&Relation> {
        self.relations.iter().find(|r| r.name == name)
    }

    #[must_use]
    pub fn relation_by_name_ignore_case(&self, name: &str) -> Option<&Relation> {
        self.relations
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn relation_by_id(&self, id: i32) -> Option<&Relation> {
        self.relations.iter().find(|r| r.id == id)
    }

    // ------------------------------------------------------------------
    // Indexes
    // ------------------------------------------------------------------

    #[must_use]
    pub fn indexes(&self) -> &[Index] {
        &self.indexes
    }

    #[must_use]
    pub fn index_by_name(&self, name: &str) -> Option<&Index> {
        self.indexes
            .binary_search_by(|i| i.name.as_str().cmp(name))
            .ok()
            .map(|pos| &self.indexes[pos])
    }

    #[must_use]
    pub fn index_by_id(&self, id: i32) -> Option<&Index> {
        self.indexes.iter().find(|i| i.id == id)
    }

    // ------------------------------------------------------------------
    // Columns
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn column_map(&self) -> &ColumnMap {
        &self.columns
    }

    /// Whether `column` names a field or a to-one relation of this table.
    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.field_by_name(column).is_some()
            || self
                .relation_by_name(column)
                .is_some_and(|r| r.kind.is_to_one())
    }
}
