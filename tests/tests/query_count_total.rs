use griddle::FromRow;
use pretty_assertions::assert_eq;

#[derive(FromRow, Debug)]
struct CountRow {
    total: i64,
}

#[test]
fn count_star_aliased_total_maps_on_an_empty_table() {
    let conn = tests::connection();
    conn.execute("CREATE TABLE empty_table (id INTEGER)").unwrap();

    let row = query_first_count_row(&conn, "SELECT COUNT(*) as total FROM empty_table").unwrap();
    assert_eq!(row.total, 0);
}

#[test]
fn count_star_reflects_inserted_rows() {
    let conn = tests::connection();
    conn.execute("CREATE TABLE empty_table (id INTEGER)").unwrap();
    conn.execute("INSERT INTO empty_table VALUES (1), (2)").unwrap();

    let rows = query_count_row(&conn, "SELECT COUNT(*) as total FROM empty_table").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total, 2);
}
