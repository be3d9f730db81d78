use crate::{
    model::types::{FieldType, Provider, RelationKind, TableKind},
    row::{FieldSpec, IndexSpec, MetaRow, RelationSpec},
};

///
/// owner_pet_rows
///
/// Two business tables joined by a many-to-one / one-to-many pair, plus
/// one composite index over a field and the to-one relation.
///
pub fn owner_pet_rows() -> Vec<MetaRow> {
    vec![
        MetaRow::schema(1, "app", Provider::Postgres),
        MetaRow::table(10, "owner", TableKind::Business),
        MetaRow::table(20, "pet", TableKind::Business),
        MetaRow::field(10, FieldSpec::new(101, "id", FieldType::Int64)),
        MetaRow::field(10, FieldSpec::new(103, "name", FieldType::String).size(80)),
        MetaRow::field(20, FieldSpec::new(201, "id", FieldType::Int32)),
        MetaRow::field(20, FieldSpec::new(202, "name", FieldType::String).not_null()),
        MetaRow::field(20, FieldSpec::new(205, "weight", FieldType::Float64).not_null()),
        MetaRow::relation(
            20,
            RelationSpec::new(203, "owner", RelationKind::Mto, 10)
                .inverse("pets")
                .constraint(),
        ),
        MetaRow::relation(
            10,
            RelationSpec::new(102, "pets", RelationKind::Otm, 20).inverse("owner"),
        ),
        MetaRow::index(
            20,
            IndexSpec::new(204, "ix_pet_owner_name", &["owner", "name"]).unique(),
        ),
    ]
}

///
/// student_course_rows
///
/// Many-to-many pair between tables 1011 and 1021; the relation on 1011
/// has id 2.
///
pub fn student_course_rows() -> Vec<MetaRow> {
    vec![
        MetaRow::schema(1, "school", Provider::Postgres),
        MetaRow::table(1011, "student", TableKind::Business),
        MetaRow::table(1021, "course", TableKind::Business),
        MetaRow::field(1011, FieldSpec::new(1, "id", FieldType::Int32)),
        MetaRow::field(1021, FieldSpec::new(1, "id", FieldType::Int32)),
        MetaRow::relation(
            1011,
            RelationSpec::new(2, "courses", RelationKind::Mtm, 1021).inverse("students"),
        ),
        MetaRow::relation(
            1021,
            RelationSpec::new(7, "students", RelationKind::Mtm, 1011).inverse("courses"),
        ),
    ]
}

///
/// friendship_rows
///
/// Self-referential many-to-many pair on table 1061 (relation ids 3, 4).
///
pub fn friendship_rows() -> Vec<MetaRow> {
    vec![
        MetaRow::schema(1, "social", Provider::Postgres),
        MetaRow::table(1061, "person", TableKind::Business),
        MetaRow::field(1061, FieldSpec::new(1, "id", FieldType::Int64)),
        MetaRow::relation(
            1061,
            RelationSpec::new(3, "friends", RelationKind::Mtm, 1061).inverse("friend_of"),
        ),
        MetaRow::relation(
            1061,
            RelationSpec::new(4, "friend_of", RelationKind::Mtm, 1061).inverse("friends"),
        ),
    ]
}
