use griddle::{Entity, FromRow};
use pretty_assertions::assert_eq;

#[test]
fn from_row_is_generated_without_a_repository() {
    #[derive(Entity, Debug)]
    #[entity(repository = false)]
    struct Bare {
        #[key]
        id: i64,
        name: String,
    }

    let conn = tests::connection();
    conn.execute("CREATE TABLE bares (id INTEGER, name TEXT)")
        .unwrap();
    conn.execute("INSERT INTO bares VALUES (1, 'x')").unwrap();

    let mut stmt = conn.prepare("SELECT id, name FROM bares").unwrap();
    let mut rows = stmt.query().unwrap();
    let row = rows.next().unwrap().unwrap();

    let bare = Bare::from_row(&row).unwrap();
    assert_eq!(bare.id, 1);
    assert_eq!(bare.name, "x");
}

#[test]
fn row_mapping_defaults_absent_entity_columns() {
    #[derive(Entity, Debug)]
    #[entity(repository = false)]
    struct Wide {
        #[key]
        id: i64,
        label: String,
        weight: f64,
    }

    let conn = tests::connection();
    let mut stmt = conn.prepare("SELECT 7 AS id").unwrap();
    let mut rows = stmt.query().unwrap();
    let row = rows.next().unwrap().unwrap();

    // Entity mapping probes by name and defaults what the projection lacks.
    let wide = Wide::from_row(&row).unwrap();
    assert_eq!(wide.id, 7);
    assert_eq!(wide.label, "");
    assert_eq!(wide.weight, 0.0);
}

#[test]
fn query_helpers_work_with_extensions_suppressed() {
    #[derive(FromRow, Debug, PartialEq)]
    #[row(extensions = false)]
    struct Total {
        total: i64,
    }

    let conn = tests::connection();
    conn.execute("CREATE TABLE things (id INTEGER)").unwrap();

    let total = query_first_total(&conn, "SELECT COUNT(*) AS total FROM things").unwrap();
    assert_eq!(total, Total { total: 0 });
}

#[test]
fn extensions_work_with_query_helpers_suppressed() {
    #[derive(FromRow, Debug, PartialEq)]
    #[row(query_helpers = false)]
    struct Flag {
        value: i64,
    }

    let conn = tests::connection();
    let mut stmt = conn.prepare("SELECT 1 AS value").unwrap();
    let mut rows = stmt.query().unwrap();
    let row = rows.next().unwrap().unwrap();

    assert_eq!(row.to_flag().unwrap(), Flag { value: 1 });
}
