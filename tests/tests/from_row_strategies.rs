use griddle::FromRow;
use pretty_assertions::assert_eq;

fn split_tags(row: &griddle::Row<'_>) -> griddle::Result<Vec<String>> {
    let index = row.require_column("tags")?;
    Ok(row
        .get_text(index)?
        .split(',')
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect())
}

#[derive(FromRow, Debug, PartialEq)]
struct Post {
    title: String,
    #[column(with = split_tags)]
    tags: Vec<String>,
}

#[derive(FromRow, Debug, PartialEq)]
struct Pair {
    #[column(index = 0)]
    left: i64,
    #[column(index = 1)]
    right: i64,
}

#[test]
fn converter_replaces_the_built_in_read() {
    let conn = tests::connection();
    let mut stmt = conn
        .prepare("SELECT 'hello' AS title, 'a,b' AS tags")
        .unwrap();
    let mut rows = stmt.query().unwrap();
    let row = rows.next().unwrap().unwrap();

    let post = row.to_post().unwrap();
    assert_eq!(
        post,
        Post {
            title: "hello".into(),
            tags: vec!["a".into(), "b".into()],
        }
    );
}

#[test]
fn index_access_reads_by_ordinal() {
    let conn = tests::connection();
    let mut stmt = conn.prepare("SELECT 3, 4").unwrap();
    let mut rows = stmt.query().unwrap();
    let row = rows.next().unwrap().unwrap();

    assert_eq!(row.to_pair().unwrap(), Pair { left: 3, right: 4 });
}

#[test]
fn missing_required_column_is_an_error() {
    let conn = tests::connection();
    let mut stmt = conn.prepare("SELECT 'x' AS title").unwrap();
    let mut rows = stmt.query().unwrap();
    let row = rows.next().unwrap().unwrap();

    // The converter probes for `tags` itself and reports its absence.
    assert!(matches!(
        row.to_post(),
        Err(griddle::Error::ColumnNotFound(name)) if name == "tags"
    ));
    assert_eq!(row.try_to_post(), None);
}

#[test]
fn name_lookup_reports_missing_columns() {
    #[derive(FromRow, Debug)]
    struct Plain {
        value: i64,
    }

    let conn = tests::connection();
    let mut stmt = conn.prepare("SELECT 1 AS other").unwrap();
    let mut rows = stmt.query().unwrap();
    let row = rows.next().unwrap().unwrap();

    assert!(matches!(
        row.to_plain(),
        Err(griddle::Error::ColumnNotFound(name)) if name == "value"
    ));
}

#[test]
fn list_mapping_preserves_row_order() {
    let conn = tests::connection();
    conn.execute("CREATE TABLE pairs (a INTEGER, b INTEGER)")
        .unwrap();
    conn.execute("INSERT INTO pairs VALUES (1, 2), (3, 4), (5, 6)")
        .unwrap();

    let mut stmt = conn.prepare("SELECT a, b FROM pairs").unwrap();
    let mut rows = stmt.query().unwrap();
    let pairs = rows.to_pair_list().unwrap();

    assert_eq!(
        pairs,
        vec![
            Pair { left: 1, right: 2 },
            Pair { left: 3, right: 4 },
            Pair { left: 5, right: 6 },
        ]
    );
}
