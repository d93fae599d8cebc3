use pretty_assertions::assert_eq;
use tests::*;

async fn race_resolves_to_winner_under_reread(s: impl Setup) {
    let driver = Box::new(RacingDriver::new(s.driver(), "states"));
    let db = s.setup_with(states_and_addresses(), driver).await;

    let mut address = Instance::new("addresses");
    db.assign(&mut address, "state", "GA").await.unwrap();

    let rows = db.find_by_column("states", "name", "ga").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(address.get("state_id").as_i64(), rows[0].id());

    db.save(&mut address).await.unwrap();
}

async fn race_stores_raw_key_under_fallback(s: impl Setup) {
    let driver = Box::new(RacingDriver::new(s.driver(), "states"));
    let db = s
        .setup_with(
            states_and_addresses().create_conflict(CreateConflict::Fallback),
            driver,
        )
        .await;

    let mut address = Instance::new("addresses");
    db.assign(&mut address, "state", "GA").await.unwrap();

    // The competing row exists; the address did not pick it up
    let rows = db.find_by_column("states", "name", "ga").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(address.get("state_id"), &Value::from("GA"));

    let err = db.save(&mut address).await.unwrap_err();
    assert!(err.is_validation());
    assert!(!address.is_persisted());
}

async fn uniqueness_violation_is_a_validation_error(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;
    create_state(&db, "ut", None).await;

    let err = db
        .create("states", Record::new().with("name", "ut"))
        .await
        .unwrap_err();
    assert!(err.is_uniqueness_violation());
    assert_eq!(
        err.to_string(),
        "validation failed: `states.name` has already been taken"
    );
}

tests!(
    race_resolves_to_winner_under_reread,
    race_stores_raw_key_under_fallback,
    uniqueness_violation_is_a_validation_error,
);
