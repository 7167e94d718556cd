use griddle::Entity;
use pretty_assertions::assert_eq;

#[derive(Entity, Debug, Clone)]
struct Ticket {
    #[key]
    id: i64,
    subject: String,
    open: bool,
}

fn seeded() -> griddle::Connection {
    let conn = tests::connection();
    let repo = TicketRepository::new(&conn);
    repo.create_table().unwrap();

    for (subject, open) in [("a", true), ("b", true), ("c", false)] {
        repo.insert(&Ticket {
            id: 0,
            subject: subject.into(),
            open,
        })
        .unwrap();
    }

    conn
}

#[test]
fn clause_is_spliced_verbatim() {
    let conn = seeded();
    let repo = TicketRepository::new(&conn);

    assert_eq!(repo.count().unwrap(), 3);
    assert_eq!(repo.count_where("open = 1").unwrap(), 2);
    assert_eq!(repo.count_where("open = 0 AND subject = 'c'").unwrap(), 1);
}

#[test]
fn empty_clause_is_rejected() {
    let conn = seeded();
    let repo = TicketRepository::new(&conn);

    for clause in ["", "   ", "\t\n"] {
        assert!(matches!(
            repo.count_where(clause),
            Err(griddle::Error::InvalidArgument(_))
        ));
    }
}

#[test]
fn validation_fires_before_the_connection_is_used() {
    let mut conn = tests::connection();
    conn.close().unwrap();

    // A closed connection would raise ConnectionClosed; the argument check
    // has to win.
    let repo = TicketRepository::new(&conn);
    assert!(matches!(
        repo.count_where(" "),
        Err(griddle::Error::InvalidArgument(_))
    ));
}
