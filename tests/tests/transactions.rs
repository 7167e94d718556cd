use griddle::{DropBehavior, Entity, TransactionBehavior};
use pretty_assertions::assert_eq;

#[derive(Entity, Debug, Clone)]
struct LogLine {
    #[key]
    id: i64,
    line: String,
}

fn repo_setup(conn: &griddle::Connection) -> LogLineRepository<'_> {
    let repo = LogLineRepository::new(conn);
    repo.create_table().unwrap();
    repo
}

#[test]
fn dropping_a_transaction_rolls_back() {
    let conn = tests::connection();
    let repo = repo_setup(&conn);

    {
        let _tx = conn.transaction(TransactionBehavior::Deferred).unwrap();
        repo.insert(&LogLine {
            id: 0,
            line: "discarded".into(),
        })
        .unwrap();
        assert_eq!(repo.count().unwrap(), 1);
    }

    assert_eq!(repo.count().unwrap(), 0);
    assert!(conn.is_autocommit().unwrap());
}

#[test]
fn committed_transaction_persists() {
    let conn = tests::connection();
    let repo = repo_setup(&conn);

    let tx = conn.transaction(TransactionBehavior::Immediate).unwrap();
    repo.insert(&LogLine {
        id: 0,
        line: "kept".into(),
    })
    .unwrap();
    tx.commit().unwrap();

    assert_eq!(repo.count().unwrap(), 1);
}

#[test]
fn drop_behavior_commit_keeps_the_changes() {
    let conn = tests::connection();
    let repo = repo_setup(&conn);

    {
        let mut tx = conn.transaction(TransactionBehavior::Deferred).unwrap();
        tx.set_drop_behavior(DropBehavior::Commit);
        repo.insert(&LogLine {
            id: 0,
            line: "kept".into(),
        })
        .unwrap();
    }

    assert_eq!(repo.count().unwrap(), 1);
}

#[test]
fn explicit_rollback_discards_the_changes() {
    let conn = tests::connection();
    let repo = repo_setup(&conn);

    let tx = conn.transaction(TransactionBehavior::Deferred).unwrap();
    repo.insert(&LogLine {
        id: 0,
        line: "discarded".into(),
    })
    .unwrap();
    tx.rollback().unwrap();

    assert_eq!(repo.count().unwrap(), 0);
}
