use griddle::Entity;
use pretty_assertions::assert_eq;
use uuid::Uuid;

#[test]
fn string_key_is_supplied_by_the_caller() {
    #[derive(Entity, Debug, Clone, PartialEq)]
    struct Country {
        #[key(auto = false)]
        code: String,
        name: String,
    }

    let conn = tests::connection();
    let repo = CountryRepository::new(&conn);
    repo.create_table().unwrap();

    repo.insert(&Country {
        code: "nz".into(),
        name: "New Zealand".into(),
    })
    .unwrap();

    let loaded = repo.get_by_id("nz".into()).unwrap().unwrap();
    assert_eq!(loaded.name, "New Zealand");

    repo.delete("nz".into()).unwrap();
    assert_eq!(repo.get_by_id("nz".into()).unwrap(), None);
}

#[test]
fn uuid_key_round_trips_as_text() {
    #[derive(Entity, Debug, Clone, PartialEq)]
    struct Session {
        #[key(auto = false)]
        token: Uuid,
        user: String,
    }

    let conn = tests::connection();
    let repo = SessionRepository::new(&conn);
    repo.create_table().unwrap();

    let token = Uuid::new_v4();
    repo.insert(&Session {
        token,
        user: "alice".into(),
    })
    .unwrap();

    let loaded = repo.get_by_id(token).unwrap().unwrap();
    assert_eq!(loaded.token, token);
    assert_eq!(loaded.user, "alice");

    // Stored hyphenated, so raw SQL can match on it.
    assert_eq!(
        repo.count_where(&format!("token = '{token}'")).unwrap(),
        1
    );
}
