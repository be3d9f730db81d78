use crate::model::{
    columns::{Columnar, StorageRole},
    types::FieldType,
};
use serde::Serialize;

/// Name of the primary-key column on every business table.
pub const PRIMARY_KEY_NAME: &str = "id";

/// Identifier shared by the canonical primary-key fields.
pub const PRIMARY_KEY_FIELD_ID: i32 = 0;

///
/// ColumnRole
///
/// Explicit role tag. Only the canonical primary-key constructor produces
/// `PrimaryKey`, so a decoded field never claims the role on its own.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum ColumnRole {
    #[default]
    Data,
    PrimaryKey,
}

///
/// Field
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Field {
    pub id: i32,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub ty: FieldType,
    pub size: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    pub active: bool,
    pub case_sensitive: bool,
    pub not_null: bool,
    pub multilingual: bool,
    pub baseline: bool,
    pub role: ColumnRole,
}

impl Field {
    /// Canonical primary-key field for an integer width; `None` for
    /// non-integer types.
    #[must_use]
    pub fn primary_key(ty: FieldType) -> Option<Self> {
        if !ty.is_integer() {
            return None;
        }

        Some(Self {
            id: PRIMARY_KEY_FIELD_ID,
            name: PRIMARY_KEY_NAME.to_string(),
            description: None,
            ty,
            size: 0,
            default_value: None,
            active: true,
            case_sensitive: false,
            not_null: true,
            multilingual: false,
            baseline: true,
            role: ColumnRole::PrimaryKey,
        })
    }

    #[must_use]
    pub const fn is_primary_key(&self) -> bool {
        matches!(self.role, ColumnRole::PrimaryKey)
    }

    /// Whether this decoded field should be swapped for a canonical key field.
    #[must_use]
    pub fn is_primary_key_candidate(&self) -> bool {
        self.name == PRIMARY_KEY_NAME && self.ty.is_integer()
    }
}

impl Columnar for Field {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn storage_role(&self) -> StorageRole {
        StorageRole::Column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_keys_exist_for_integer_widths_only() {
        for ty in [
            FieldType::Int8,
            FieldType::Int16,
            FieldType::Int32,
            FieldType::Int64,
        ] {
            let field = Field::primary_key(ty).expect("integer widths have a key field");
            assert!(field.is_primary_key());
            assert_eq!(field.ty, ty);
            assert_eq!(field.name, PRIMARY_KEY_NAME);
        }

        assert!(Field::primary_key(FieldType::String).is_none());
        assert!(Field::primary_key(FieldType::Float64).is_none());
    }

    #[test]
    fn canonical_keys_of_one_width_are_interchangeable() {
        assert_eq!(
            Field::primary_key(FieldType::Int32),
            Field::primary_key(FieldType::Int32)
        );
        assert_ne!(
            Field::primary_key(FieldType::Int32),
            Field::primary_key(FieldType::Int64)
        );
    }
}
