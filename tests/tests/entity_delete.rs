use griddle::Entity;
use pretty_assertions::assert_eq;

#[test]
fn delete_then_get_by_id_is_absent() {
    #[derive(Entity, Debug, Clone, PartialEq)]
    struct Note {
        #[key]
        id: i64,
        body: String,
    }

    let conn = tests::connection();
    let repo = NoteRepository::new(&conn);
    repo.create_table().unwrap();

    let id = repo
        .insert(&Note {
            id: 0,
            body: "ephemeral".into(),
        })
        .unwrap();
    assert_eq!(repo.count().unwrap(), 1);

    repo.delete(id).unwrap();

    assert_eq!(repo.get_by_id(id).unwrap(), None);
    assert_eq!(repo.count().unwrap(), 0);
}
