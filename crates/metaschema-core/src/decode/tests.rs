use super::*;
use crate::row::{FieldSpec, IndexSpec, RelationSpec};

const TAGS: [u8; 12] = [0, 1, 2, 3, 7, 15, 17, 18, 23, 25, 101, 200];

fn row_with_tag(tag: u8) -> MetaRow {
    MetaRow {
        id: 1,
        object_type: tag,
        reference_id: 1,
        name: "x".to_string(),
        value: Some("a;b".to_string()),
        active: true,
        ..MetaRow::default()
    }
}

fn slot() -> (RelationRef, TableRef) {
    (RelationRef::new(TableRef(0), 0), TableRef(1))
}

#[test]
fn each_decoder_accepts_only_its_own_tag() {
    for tag in TAGS {
        let row = row_with_tag(tag);
        let kind = ObjectType::from_tag(tag);
        let (this, target) = slot();

        assert_eq!(decode_field(&row).is_some(), kind == ObjectType::Field, "tag {tag}");
        assert_eq!(
            decode_relation(&row, this, target).is_some(),
            kind == ObjectType::Relation,
            "tag {tag}"
        );
        assert_eq!(decode_index(&row).is_some(), kind == ObjectType::Index, "tag {tag}");
        assert_eq!(
            decode_table(&row, TableRef(0)).is_some(),
            kind == ObjectType::Table,
            "tag {tag}"
        );
        assert_eq!(
            decode_table_space(&row).is_some(),
            kind == ObjectType::Tablespace,
            "tag {tag}"
        );
        assert_eq!(
            decode_sequence(&row).is_some(),
            kind == ObjectType::Sequence,
            "tag {tag}"
        );
        assert_eq!(
            decode_language(&row).is_some(),
            kind == ObjectType::Language,
            "tag {tag}"
        );
        assert_eq!(
            decode_parameter(&row).is_some(),
            kind == ObjectType::Parameter,
            "tag {tag}"
        );
        assert_eq!(decode_schema(&row).is_some(), kind == ObjectType::Schema, "tag {tag}");
    }
}

#[test]
fn relation_rows_never_decode_as_fields() {
    let row = MetaRow::relation(1, RelationSpec::new(2, "owner", RelationKind::Mto, 3));

    assert!(decode_field(&row).is_none());
    assert!(decode_index(&row).is_none());
}

#[test]
fn field_decoding_reads_type_and_flags() {
    let row = MetaRow::field(
        9,
        FieldSpec::new(90, "title", FieldType::LongString)
            .size(4000)
            .multilingual()
            .baseline(),
    )
    .with_description("display title");

    let field = decode_field(&row).expect("field row");

    assert_eq!(field.id, 90);
    assert_eq!(field.ty, FieldType::LongString);
    assert_eq!(field.size, 4000);
    assert!(field.multilingual);
    assert!(field.baseline);
    assert!(!field.not_null);
    assert_eq!(field.description.as_deref(), Some("display title"));
    assert!(!field.is_primary_key());
}

#[test]
fn unknown_field_type_decodes_as_undefined() {
    let mut row = MetaRow::field(9, FieldSpec::new(90, "blob", FieldType::String));
    row.data_type = 22;

    assert_eq!(decode_field(&row).map(|f| f.ty), Some(FieldType::Undefined));
}

#[test]
fn not_null_numeric_fields_default_to_zero() {
    let row = MetaRow::field(9, FieldSpec::new(91, "qty", FieldType::Int32).not_null());
    assert_eq!(
        decode_field(&row).and_then(|f| f.default_value),
        Some("0".to_string())
    );

    let row = MetaRow::field(9, FieldSpec::new(92, "ratio", FieldType::Float32).not_null());
    assert_eq!(
        decode_field(&row).and_then(|f| f.default_value),
        Some("0".to_string())
    );
}

#[test]
fn nullable_or_textual_fields_have_no_implicit_default() {
    let row = MetaRow::field(9, FieldSpec::new(91, "qty", FieldType::Int32));
    assert_eq!(decode_field(&row).and_then(|f| f.default_value), None);

    let row = MetaRow::field(9, FieldSpec::new(93, "code", FieldType::String).not_null());
    assert_eq!(decode_field(&row).and_then(|f| f.default_value), None);
}

#[test]
fn blank_default_counts_as_absent() {
    for blank in ["", "   "] {
        let row = MetaRow::field(5, FieldSpec::new(1, "qty", FieldType::Int32).not_null())
            .with_value(blank);
        assert_eq!(
            decode_field(&row).and_then(|f| f.default_value),
            Some("0".to_string()),
            "value {blank:?}"
        );

        let row = MetaRow::field(5, FieldSpec::new(2, "note", FieldType::String))
            .with_value(blank);
        assert_eq!(decode_field(&row).and_then(|f| f.default_value), None);
    }

    let row = MetaRow::field(5, FieldSpec::new(3, "qty", FieldType::Int32).default_value(" 7 "));
    assert_eq!(
        decode_field(&row).and_then(|f| f.default_value),
        Some("7".to_string())
    );
}

#[test]
fn explicit_default_wins() {
    let row = MetaRow::field(
        9,
        FieldSpec::new(91, "qty", FieldType::Int32)
            .not_null()
            .default_value("12"),
    );

    assert_eq!(
        decode_field(&row).and_then(|f| f.default_value),
        Some("12".to_string())
    );
}

#[test]
fn relation_decoding_reads_kind_and_flags() {
    let row = MetaRow::relation(
        1,
        RelationSpec::new(4, "tags", RelationKind::Mtm, 2)
            .inverse("items")
            .not_null(),
    );
    let (this, target) = slot();
    let relation = decode_relation(&row, this, target).expect("relation row");

    assert_eq!(relation.kind, RelationKind::Mtm);
    assert!(relation.not_null);
    assert!(!relation.constraint);
    assert_eq!(relation.target(), target);
    assert!(!relation.has_inverse());
    assert_eq!(decode_inverse_name(&row), Some("items"));
}

#[test]
fn unknown_relation_kind_decodes_as_undefined() {
    let mut row = MetaRow::relation(1, RelationSpec::new(4, "odd", RelationKind::Mto, 2));
    row.flags = crate::codec::write_relation_kind(row.flags, 42);
    let (this, target) = slot();

    assert_eq!(
        decode_relation(&row, this, target).map(|r| r.kind),
        Some(RelationKind::Undefined)
    );
}

#[test]
fn index_decoding_recovers_column_order() {
    let row = MetaRow::index(1, IndexSpec::new(8, "ix_name", &["b", "a"]).bitmap());
    let index = decode_index(&row).expect("index row");

    assert_eq!(index.columns, ["b", "a"]);
    assert!(index.bitmap);
    assert!(!index.unique);
}

#[test]
fn index_without_value_has_no_columns() {
    let mut row = MetaRow::index(1, IndexSpec::new(8, "ix_empty", &[]));
    row.value = None;

    assert_eq!(decode_index(&row).map(|i| i.columns.len()), Some(0));
}

#[test]
fn table_decoding_reads_kind_and_physical_name() {
    let row = MetaRow::table(1011, "person", TableKind::Business)
        .with_value("t_person")
        .with_flag(bit::TABLE_CACHED, true);
    let table = decode_table(&row, TableRef(3)).expect("table row");

    assert_eq!(table.kind, TableKind::Business);
    assert_eq!(table.physical_name, "t_person");
    assert!(table.cached);
    assert!(!table.readonly);
    assert_eq!(table.this(), TableRef(3));
}

#[test]
fn table_without_physical_name_uses_logical_name() {
    let row = MetaRow::table(1011, "person", TableKind::Log);
    let table = decode_table(&row, TableRef(0)).expect("table row");

    assert_eq!(table.physical_name, "person");
    assert_eq!(table.kind, TableKind::Log);
}

#[test]
fn simple_records_decode() {
    let ts = decode_table_space(&MetaRow::tablespace(1, "data", Some("data01.dbf"), false, true))
        .expect("tablespace");
    assert!(ts.table);
    assert!(!ts.index);
    assert_eq!(ts.file_name.as_deref(), Some("data01.dbf"));

    let seq = decode_sequence(&MetaRow::sequence(2, "seq_person", 1000)).expect("sequence");
    assert_eq!(seq.start, 1000);

    let bad = decode_sequence(&MetaRow::sequence(3, "seq_bad", 0).with_value("nope"))
        .expect("sequence");
    assert_eq!(bad.start, 0);

    let lang = decode_language(&MetaRow::language(4, "French", "fr")).expect("language");
    assert_eq!(lang.code.as_deref(), Some("fr"));

    let param = decode_parameter(&MetaRow::parameter(5, 1, "version", "3")).expect("parameter");
    assert_eq!(param.value.as_deref(), Some("3"));
    assert_eq!(param.reference_id, 1);
}

#[test]
fn schema_decoding_reads_provider() {
    let schema = decode_schema(&MetaRow::schema(1, "app", Provider::Postgres)).expect("schema");

    assert_eq!(schema.provider, Provider::Postgres);
    assert_eq!(schema.name, "app");
}
