use metaschema_core::{
    Compiler,
    model::columns::Column,
    obs::NullSink,
    prelude::*,
    validate::validate_schema,
};

const LIBRARY: &str = include_str!("fixtures/library.json");

fn library() -> Schema {
    let rows: Vec<MetaRow> = serde_json::from_str(LIBRARY).expect("fixture parses");

    let compilation = Compiler::new()
        .with_sink(&NullSink)
        .strict(true)
        .compile(&rows)
        .expect("fixture compiles strictly");
    assert!(
        compilation.report.is_clean(),
        "{:?}",
        compilation.report.diagnostics
    );

    compilation.schema
}

#[test]
fn dump_compiles_into_linked_schema() {
    let schema = library();

    assert_eq!(schema.name, "library");
    assert_eq!(schema.provider, Provider::Postgres);
    assert_eq!(schema.description.as_deref(), Some("Lending library"));
    assert_eq!(schema.table_count(), 3);
    assert!(validate_schema(&schema).is_ok());
}

#[test]
fn table_attributes_come_from_flags_and_value() {
    let schema = library();

    let author = schema.table_by_id(100).expect("author");
    assert_eq!(author.physical_name, "t_author");

    let book = schema.table_by_name("book").expect("book");
    assert!(book.baseline);
    assert!(!book.cached);

    let genre = schema.table_by_name("genre").expect("genre");
    assert!(genre.cached);
    assert_eq!(genre.primary_key().map(|f| f.ty), Some(FieldType::Int16));
}

#[test]
fn field_attributes_come_from_flags() {
    let schema = library();

    let name = schema
        .table_by_name("author")
        .and_then(|t| t.field_by_name("name"))
        .expect("author.name");
    assert_eq!(name.size, 120);
    assert!(name.not_null);

    let book = schema.table_by_name("book").expect("book");
    let price = book.field_by_name("price").expect("price");
    assert_eq!(price.ty, FieldType::Float64);
    assert_eq!(price.default_value.as_deref(), Some("0"));
    assert!(!book.field_by_name("published").expect("published").active);
}

#[test]
fn book_columns_interleave_fields_and_author() {
    let schema = library();
    let book = schema.table_by_name("book").expect("book");

    // by id: id 0, author 4, title 6, price 7, published 8
    let price = book.field_position("price").expect("price");
    let published = book.field_position("published").expect("published");
    let title = book.field_position("title").expect("title");
    let author = 0;

    assert_eq!(
        book.column_map().as_slice(),
        [
            Column::Field(0),
            Column::Relation(author),
            Column::Field(title),
            Column::Field(price),
            Column::Field(published),
        ]
    );

    let index = book.index_by_name("ix_book_title").expect("index");
    assert_eq!(index.columns, ["title", "author"]);
    assert!(index.unique);
}

#[test]
fn genres_route_through_one_junction() {
    let schema = library();

    let junction = schema
        .junction_by_physical_name("00200_00300_005")
        .expect("junction");
    assert_eq!(junction.kind, TableKind::Mtm);

    let genres = schema
        .table_by_name("book")
        .and_then(|t| t.relation_by_name("genres"))
        .expect("book.genres");
    let books = schema
        .table_by_name("genre")
        .and_then(|t| t.relation_by_name("books"))
        .expect("genre.books");

    assert_eq!(genres.target(), junction.this());
    assert_eq!(books.target(), junction.this());
    assert_eq!(schema.inverse_of(genres).map(|r| r.id), Some(books.id));
    assert_eq!(
        genres.mtm_table().map(|t| schema.table(t).name.as_str()),
        Some("genre")
    );
}

#[test]
fn catalog_records_are_collected() {
    let schema = library();

    let [space] = schema.tablespaces() else {
        panic!("expected one tablespace");
    };
    assert_eq!(space.file_name.as_deref(), Some("main.dat"));
    assert!(space.index && space.table);

    assert_eq!(schema.sequences()[0].start, 1000);
    assert_eq!(schema.languages()[0].code.as_deref(), Some("en"));
    assert_eq!(
        schema.parameter("version").and_then(|p| p.value.as_deref()),
        Some("3")
    );
}
