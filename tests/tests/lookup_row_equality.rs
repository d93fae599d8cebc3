use lookup::LookupRow;
use pretty_assertions::assert_eq;
use tests::*;

async fn resolve(db: &Db, table: &str, key: &str) -> LookupRow {
    db.lookup(table)
        .unwrap()
        .resolve_entity(db, key)
        .await
        .unwrap()
        .unwrap()
}

async fn rows_equal_their_keys(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;
    create_state(&db, "ut", None).await;

    let ut = resolve(&db, "states", "UT").await;
    assert_eq!(ut, "UT");
    assert_eq!(ut, "ut");
    assert_ne!(ut, "utah");
    assert_eq!(ut, resolve(&db, "states", "ut").await);
}

async fn rows_of_different_tables_differ(s: impl Setup) {
    let db = s
        .setup(
            Db::builder()
                .lookup(Lookup::new("states"))
                .lookup(Lookup::new("statuses")),
        )
        .await;

    create_state(&db, "ut", None).await;
    db.create("statuses", Record::new().with("name", "ut"))
        .await
        .unwrap();

    let state = resolve(&db, "states", "ut").await;
    let status = resolve(&db, "statuses", "ut").await;

    assert_eq!(state.id(), status.id());
    assert_ne!(state, status);
}

async fn rows_match_patterns(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;
    create_state(&db, "north dakota", None).await;

    let nd = resolve(&db, "states", "north_dakota").await;
    assert_eq!(nd.to_string(), "north dakota");
    assert!(nd.matches("DAKOTA"));
    assert!(nd.matches_pattern(&regex::Regex::new(r"^north\s").unwrap()));
    assert!(!nd.matches("south"));
}

tests!(
    rows_equal_their_keys,
    rows_of_different_tables_differ,
    rows_match_patterns,
);
