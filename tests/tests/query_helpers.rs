use griddle::FromRow;
use pretty_assertions::assert_eq;

#[derive(FromRow, Debug, Clone, PartialEq)]
struct NameRow {
    name: String,
}

fn seeded() -> griddle::Connection {
    let conn = tests::connection();
    conn.execute("CREATE TABLE names (name TEXT)").unwrap();
    conn.execute("INSERT INTO names VALUES ('carol'), ('alice'), ('bob')")
        .unwrap();
    conn
}

#[test]
fn query_maps_every_row_in_order() {
    let conn = seeded();

    let rows = query_name_row(&conn, "SELECT name FROM names").unwrap();
    let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, ["carol", "alice", "bob"]);
}

#[test]
fn query_first_returns_the_first_row() {
    let conn = seeded();

    let row = query_first_name_row(&conn, "SELECT name FROM names ORDER BY name").unwrap();
    assert_eq!(row.name, "alice");
}

#[test]
fn query_first_errors_on_zero_rows() {
    let conn = seeded();

    assert!(matches!(
        query_first_name_row(&conn, "SELECT name FROM names WHERE 0 = 1"),
        Err(griddle::Error::RecordNotFound)
    ));
}

#[test]
fn query_first_or_default_returns_none_on_zero_rows() {
    let conn = seeded();

    let absent =
        query_first_or_default_name_row(&conn, "SELECT name FROM names WHERE 0 = 1").unwrap();
    assert_eq!(absent, None);

    let present =
        query_first_or_default_name_row(&conn, "SELECT name FROM names ORDER BY name").unwrap();
    assert_eq!(
        present,
        Some(NameRow {
            name: "alice".into()
        })
    );
}

#[test]
fn empty_sql_is_rejected_before_preparing() {
    let conn = seeded();

    assert!(matches!(
        query_name_row(&conn, "  "),
        Err(griddle::Error::InvalidArgument(_))
    ));
}
