use fruit_list::db::{
    count_fruits, create_fruit, delete_fruit, fetch_fruit, fetch_fruits, open_in_memory,
    open_store, update_fruit,
};
use fruit_list::{Fruit, FruitId, StoreError};
use rusqlite::Connection;
use tempfile::TempDir;

fn names(fruits: &[Fruit]) -> Vec<&str> {
    fruits.iter().map(|fruit| fruit.name.as_str()).collect()
}

#[test]
fn fetch_sorts_by_name_regardless_of_insert_order() {
    let conn = open_in_memory().unwrap();
    for name in ["Mango", "Apple", "Kiwi", "Banana"] {
        create_fruit(&conn, name).unwrap();
    }

    let fruits = fetch_fruits(&conn).unwrap();
    assert_eq!(names(&fruits), vec!["Apple", "Banana", "Kiwi", "Mango"]);
}

#[test]
fn create_returns_fresh_ids() {
    let conn = open_in_memory().unwrap();
    let first = create_fruit(&conn, "Apple").unwrap();
    let second = create_fruit(&conn, "Apple").unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(fetch_fruit(&conn, second.id).unwrap().name, "Apple");
}

#[test]
fn ordering_is_byte_wise_not_case_folded() {
    let conn = open_in_memory().unwrap();
    create_fruit(&conn, "apple").unwrap();
    create_fruit(&conn, "Zebra melon").unwrap();
    create_fruit(&conn, "Äpfel").unwrap();

    let fruits = fetch_fruits(&conn).unwrap();
    assert_eq!(names(&fruits), vec!["Zebra melon", "apple", "Äpfel"]);
}

#[test]
fn duplicate_names_tie_break_by_id() {
    let conn = open_in_memory().unwrap();
    let first = create_fruit(&conn, "Plum").unwrap();
    create_fruit(&conn, "Fig").unwrap();
    let second = create_fruit(&conn, "Plum").unwrap();

    let fruits = fetch_fruits(&conn).unwrap();
    let ids: Vec<FruitId> = fruits.iter().map(|fruit| fruit.id).collect();
    assert_eq!(names(&fruits), vec!["Fig", "Plum", "Plum"]);
    assert_eq!(&ids[1..], &[first.id, second.id]);
}

#[test]
fn empty_name_is_accepted_and_sorts_first() {
    let conn = open_in_memory().unwrap();
    create_fruit(&conn, "Apple").unwrap();
    let blank = create_fruit(&conn, "").unwrap();
    create_fruit(&conn, " ").unwrap();

    let fruits = fetch_fruits(&conn).unwrap();
    assert_eq!(fruits[0].id, blank.id);
    assert_eq!(names(&fruits), vec!["", " ", "Apple"]);
}

#[test]
fn update_changes_only_target_name() {
    let conn = open_in_memory().unwrap();
    let apple = create_fruit(&conn, "Apple").unwrap();
    let banana = create_fruit(&conn, "Banana").unwrap();
    let cherry = create_fruit(&conn, "Cherry").unwrap();

    update_fruit(&conn, apple.id, "Date").unwrap();

    let fruits = fetch_fruits(&conn).unwrap();
    assert_eq!(
        fruits,
        vec![
            banana,
            cherry,
            Fruit {
                id: apple.id,
                name: "Date".to_string(),
            },
        ]
    );
}

#[test]
fn delete_removes_exactly_one() {
    let conn = open_in_memory().unwrap();
    create_fruit(&conn, "Apple").unwrap();
    let banana = create_fruit(&conn, "Banana").unwrap();
    create_fruit(&conn, "Banana").unwrap();

    delete_fruit(&conn, banana.id).unwrap();

    let fruits = fetch_fruits(&conn).unwrap();
    assert_eq!(fruits.len(), 2);
    assert_eq!(count_fruits(&conn).unwrap(), 2);
    assert!(fruits.iter().all(|fruit| fruit.id != banana.id));
}

#[test]
fn missing_id_returns_not_found_and_leaves_store_unchanged() {
    let conn = open_in_memory().unwrap();
    let apple = create_fruit(&conn, "Apple").unwrap();
    create_fruit(&conn, "Banana").unwrap();
    delete_fruit(&conn, apple.id).unwrap();
    let before = fetch_fruits(&conn).unwrap();

    let err = update_fruit(&conn, apple.id, "Ghost").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == apple.id));

    let err = delete_fruit(&conn, FruitId(999)).unwrap_err();
    assert!(err.is_not_found());

    let err = fetch_fruit(&conn, apple.id).unwrap_err();
    assert!(err.is_not_found());

    assert_eq!(fetch_fruits(&conn).unwrap(), before);
}

#[test]
fn data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("fruits.sqlite");

    {
        let conn = open_store(&path).unwrap();
        create_fruit(&conn, "Banana").unwrap();
        create_fruit(&conn, "Apple").unwrap();
    }

    let conn = open_store(&path).unwrap();
    let fruits = fetch_fruits(&conn).unwrap();
    assert_eq!(names(&fruits), vec!["Apple", "Banana"]);
}

#[test]
fn ids_are_not_reused_after_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fruits.sqlite");

    let removed = {
        let conn = open_store(&path).unwrap();
        let fruit = create_fruit(&conn, "Lime").unwrap();
        delete_fruit(&conn, fruit.id).unwrap();
        fruit.id
    };

    let conn = open_store(&path).unwrap();
    let fresh = create_fruit(&conn, "Lemon").unwrap();
    assert!(fresh.id > removed);
}

#[test]
fn write_failure_surfaces_as_persistence_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fruits.sqlite");
    let conn = open_store(&path).unwrap();
    let apple = create_fruit(&conn, "Apple").unwrap();

    Connection::open(&path)
        .unwrap()
        .execute("DROP TABLE fruits", [])
        .unwrap();

    let err = create_fruit(&conn, "Banana").unwrap_err();
    assert!(matches!(err, StoreError::Persistence { action: "insert fruit", .. }));
    assert!(err.to_string().contains("insert fruit"));

    let err = update_fruit(&conn, apple.id, "Apricot").unwrap_err();
    assert!(matches!(err, StoreError::Persistence { action: "update fruit", .. }));

    let err = fetch_fruits(&conn).unwrap_err();
    assert!(!err.is_not_found());
}
