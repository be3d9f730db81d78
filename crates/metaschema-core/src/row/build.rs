//! Row constructors: encode typed attributes into the flag and type words.

use crate::{
    codec::{bit, write_bit, write_field_size, write_relation_kind},
    model::{
        index::INDEX_COLUMN_DELIMITER,
        types::{FieldType, Provider, RelationKind, TableKind},
    },
    row::{MetaRow, ObjectType},
};

impl MetaRow {
    fn of_kind(kind: ObjectType, id: i32, reference_id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            schema_id: 0,
            object_type: kind.tag(),
            reference_id,
            data_type: 0,
            flags: 0,
            name: name.into(),
            description: None,
            value: None,
            active: true,
        }
    }

    #[must_use]
    pub fn schema(id: i32, name: impl Into<String>, provider: Provider) -> Self {
        let mut row = Self::of_kind(ObjectType::Schema, id, 0, name);
        row.schema_id = id;
        row.data_type = provider.code();
        row
    }

    #[must_use]
    pub fn table(id: i32, name: impl Into<String>, kind: TableKind) -> Self {
        let mut row = Self::of_kind(ObjectType::Table, id, 0, name);
        row.data_type = i32::from(kind.code());
        row
    }

    #[must_use]
    pub fn field(table_id: i32, spec: FieldSpec) -> Self {
        let mut row = Self::of_kind(ObjectType::Field, spec.id, table_id, spec.name);
        row.data_type = spec.ty.code().map_or(127, i32::from);
        row.value = spec.default_value;

        let mut flags = write_bit(0, bit::FIELD_CASE_SENSITIVE, spec.case_sensitive);
        flags = write_bit(flags, bit::FIELD_NOT_NULL, spec.not_null);
        flags = write_bit(flags, bit::FIELD_MULTILINGUAL, spec.multilingual);
        flags = write_bit(flags, bit::BASELINE, spec.baseline);
        row.flags = write_field_size(flags, spec.size);
        row
    }

    #[must_use]
    pub fn relation(table_id: i32, spec: RelationSpec) -> Self {
        let mut row = Self::of_kind(ObjectType::Relation, spec.id, table_id, spec.name);
        row.data_type = spec.target;
        row.value = spec.inverse;

        let mut flags = write_bit(0, bit::RELATION_NOT_NULL, spec.not_null);
        flags = write_bit(flags, bit::RELATION_CONSTRAINT, spec.constraint);
        flags = write_bit(flags, bit::BASELINE, spec.baseline);
        row.flags = write_relation_kind(flags, spec.kind.code());
        row
    }

    #[must_use]
    pub fn index(table_id: i32, spec: IndexSpec) -> Self {
        let mut row = Self::of_kind(ObjectType::Index, spec.id, table_id, spec.name);
        row.value = Some(spec.columns.join(&INDEX_COLUMN_DELIMITER.to_string()));

        let mut flags = write_bit(0, bit::INDEX_UNIQUE, spec.unique);
        flags = write_bit(flags, bit::INDEX_BITMAP, spec.bitmap);
        row.flags = write_bit(flags, bit::BASELINE, spec.baseline);
        row
    }

    #[must_use]
    pub fn tablespace(
        id: i32,
        name: impl Into<String>,
        file_name: Option<&str>,
        index: bool,
        table: bool,
    ) -> Self {
        let mut row = Self::of_kind(ObjectType::Tablespace, id, 0, name);
        row.value = file_name.map(ToString::to_string);
        row.flags = write_bit(
            write_bit(0, bit::TABLESPACE_INDEX, index),
            bit::TABLESPACE_TABLE,
            table,
        );
        row
    }

    #[must_use]
    pub fn sequence(id: i32, name: impl Into<String>, start: i64) -> Self {
        let mut row = Self::of_kind(ObjectType::Sequence, id, 0, name);
        row.value = Some(start.to_string());
        row
    }

    #[must_use]
    pub fn language(id: i32, name: impl Into<String>, code: &str) -> Self {
        let mut row = Self::of_kind(ObjectType::Language, id, 0, name);
        row.value = Some(code.to_string());
        row
    }

    #[must_use]
    pub fn parameter(
        id: i32,
        reference_id: i32,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut row = Self::of_kind(ObjectType::Parameter, id, reference_id, name);
        row.value = Some(value.into());
        row
    }

    // ------------------------------------------------------------------
    // Adjusters
    // ------------------------------------------------------------------

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub const fn with_schema_id(mut self, schema_id: i32) -> Self {
        self.schema_id = schema_id;
        self
    }

    #[must_use]
    pub const fn with_flag(mut self, position: u8, value: bool) -> Self {
        self.flags = write_bit(self.flags, position, value);
        self
    }

    #[must_use]
    pub const fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

///
/// FieldSpec
///

#[derive(Clone, Debug)]
pub struct FieldSpec {
    pub id: i32,
    pub name: String,
    pub ty: FieldType,
    pub size: i32,
    pub default_value: Option<String>,
    pub not_null: bool,
    pub case_sensitive: bool,
    pub multilingual: bool,
    pub baseline: bool,
}

impl FieldSpec {
    #[must_use]
    pub fn new(id: i32, name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            id,
            name: name.into(),
            ty,
            size: 0,
            default_value: None,
            not_null: false,
            case_sensitive: false,
            multilingual: false,
            baseline: false,
        }
    }

    #[must_use]
    pub const fn size(mut self, size: i32) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub const fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    #[must_use]
    pub const fn case_sensitive(mut self) -> Self {
        self.case_sensitive = true;
        self
    }

    #[must_use]
    pub const fn multilingual(mut self) -> Self {
        self.multilingual = true;
        self
    }

    #[must_use]
    pub const fn baseline(mut self) -> Self {
        self.baseline = true;
        self
    }
}

///
/// RelationSpec
///
/// `target` is the target table's row id; `inverse` names the reciprocal
/// relation on that table.
///

#[derive(Clone, Debug)]
pub struct RelationSpec {
    pub id: i32,
    pub name: String,
    pub kind: RelationKind,
    pub target: i32,
    pub inverse: Option<String>,
    pub not_null: bool,
    pub constraint: bool,
    pub baseline: bool,
}

impl RelationSpec {
    #[must_use]
    pub fn new(id: i32, name: impl Into<String>, kind: RelationKind, target: i32) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            target,
            inverse: None,
            not_null: false,
            constraint: false,
            baseline: false,
        }
    }

    #[must_use]
    pub fn inverse(mut self, name: impl Into<String>) -> Self {
        self.inverse = Some(name.into());
        self
    }

    #[must_use]
    pub const fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    #[must_use]
    pub const fn constraint(mut self) -> Self {
        self.constraint = true;
        self
    }

    #[must_use]
    pub const fn baseline(mut self) -> Self {
        self.baseline = true;
        self
    }
}

///
/// IndexSpec
///

#[derive(Clone, Debug)]
pub struct IndexSpec {
    pub id: i32,
    pub name: String,
    pub columns: Vec<String>,
    pub unique: bool,
    pub bitmap: bool,
    pub baseline: bool,
}

impl IndexSpec {
    #[must_use]
    pub fn new(id: i32, name: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            id,
            name: name.into(),
            columns: columns.iter().map(ToString::to_string).collect(),
            unique: false,
            bitmap: false,
            baseline: false,
        }
    }

    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub const fn bitmap(mut self) -> Self {
        self.bitmap = true;
        self
    }

    #[must_use]
    pub const fn baseline(mut self) -> Self {
        self.baseline = true;
        self
    }
}
