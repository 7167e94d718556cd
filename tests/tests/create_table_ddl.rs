use griddle::Entity;

#[derive(Entity, Debug)]
#[entity(table = "items")]
struct Item {
    #[key]
    id: i64,
    label: String,
    #[column(default = "0")]
    quantity: i64,
    #[column(type = text)]
    payload: i64,
    note: Option<String>,
}

#[test]
fn emitted_ddl_matches_the_schema() {
    let conn = tests::connection();
    ItemRepository::new(&conn).create_table().unwrap();

    let ddl = conn
        .query_scalar_text("SELECT sql FROM sqlite_master WHERE type = 'table' AND name = 'items'")
        .unwrap();

    assert!(ddl.contains("id INTEGER PRIMARY KEY AUTOINCREMENT"), "{ddl}");
    assert!(ddl.contains("label TEXT NOT NULL"), "{ddl}");
    assert!(ddl.contains("quantity INTEGER NOT NULL DEFAULT 0"), "{ddl}");
    assert!(ddl.contains("payload TEXT NOT NULL"), "{ddl}");
    assert!(ddl.contains("note TEXT"), "{ddl}");
}

#[test]
fn create_table_is_idempotent() {
    let conn = tests::connection();
    let repo = ItemRepository::new(&conn);

    repo.create_table().unwrap();
    repo.create_table().unwrap();
}

#[test]
fn ddl_default_applies_to_rows_inserted_outside_the_repository() {
    let conn = tests::connection();
    ItemRepository::new(&conn).create_table().unwrap();

    conn.execute("INSERT INTO items (label, payload) VALUES ('x', '7')")
        .unwrap();
    assert_eq!(
        conn.query_scalar_int("SELECT quantity FROM items").unwrap(),
        0
    );
}
