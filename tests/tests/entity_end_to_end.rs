use griddle::Entity;
use pretty_assertions::assert_eq;

#[derive(Entity, Debug, Clone, PartialEq)]
struct User {
    #[key]
    id: i64,
    #[column("user_name")]
    name: String,
    email: String,
    is_active: bool,
}

#[test]
fn full_user_scenario() {
    let conn = tests::connection();
    let repo = UserRepository::new(&conn);
    repo.create_table().unwrap();

    let key = repo
        .insert(&User {
            id: 0,
            name: "Alice".into(),
            email: "a@x.com".into(),
            is_active: true,
        })
        .unwrap();
    assert_eq!(key, 1);

    let users = repo.get_all().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Alice");
    assert_eq!(users[0].email, "a@x.com");
    assert!(users[0].is_active);

    assert_eq!(repo.count_where("is_active = 1").unwrap(), 1);
    assert_eq!(repo.count_where("is_active = 0").unwrap(), 0);

    // The override landed as the real column name.
    assert_eq!(
        conn.query_scalar_text("SELECT user_name FROM users WHERE id = 1")
            .unwrap(),
        "Alice"
    );
}

#[test]
fn get_all_preserves_insertion_order() {
    let conn = tests::connection();
    let repo = UserRepository::new(&conn);
    repo.create_table().unwrap();

    for name in ["carol", "alice", "bob"] {
        repo.insert(&User {
            id: 0,
            name: name.into(),
            email: format!("{name}@x.com"),
            is_active: true,
        })
        .unwrap();
    }

    let names: Vec<String> = repo.get_all().unwrap().into_iter().map(|u| u.name).collect();
    assert_eq!(names, ["carol", "alice", "bob"]);
}
