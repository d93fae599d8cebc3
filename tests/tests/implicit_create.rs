use pretty_assertions::assert_eq;
use tests::*;

async fn count_states(db: &Db, name: &str) -> usize {
    db.find_by_column("states", "name", name)
        .await
        .unwrap()
        .len()
}

async fn assigning_unseen_key_creates_row(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;

    let mut address = Instance::new("addresses");
    db.assign(&mut address, "state", "ga").await.unwrap();

    let ga = db
        .lookup("states")
        .unwrap()
        .resolve_record(&db, "ga")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(ga.name(), "ga");
    assert_eq!(address.get("state_id"), &Value::I64(ga.id()));

    db.save(&mut address).await.unwrap();
    let reloaded = db.get("addresses", address.id().unwrap()).await.unwrap();
    assert_eq!(reloaded.get("state_id"), &Value::I64(ga.id()));
}

async fn created_row_uses_storage_form(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;

    let mut address = Instance::new("addresses");
    db.assign(&mut address, "state", "New_York").await.unwrap();

    assert_eq!(count_states(&db, "new york").await, 1);
    assert_eq!(count_states(&db, "New_York").await, 0);
}

async fn reassigning_does_not_duplicate(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;

    let mut first = Instance::new("addresses");
    db.assign(&mut first, "state", "GA").await.unwrap();

    let mut second = Instance::new("addresses");
    db.assign(&mut second, "state", "ga").await.unwrap();
    db.assign(&mut second, "state", "Ga").await.unwrap();

    assert_eq!(count_states(&db, "ga").await, 1);
    assert_eq!(first.get("state_id"), second.get("state_id"));
}

async fn assigning_existing_key_uses_its_id(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;
    let ut = create_state(&db, "ut", Some("Utah")).await;

    let mut address = Instance::new("addresses");
    db.assign(&mut address, "state", "UT").await.unwrap();

    assert_eq!(address.get("state_id").as_i64(), ut.id());
    assert_eq!(count_states(&db, "ut").await, 1);
}

async fn assigning_a_row(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;
    create_state(&db, "ut", None).await;
    let ut = db
        .lookup("states")
        .unwrap()
        .resolve_entity(&db, "ut")
        .await
        .unwrap()
        .unwrap();

    let mut address = Instance::new("addresses");
    db.assign(&mut address, "state", &ut).await.unwrap();
    assert_eq!(address.get("state_id"), &Value::I64(ut.id()));
}

async fn assigning_a_row_of_another_table(s: impl Setup) {
    let db = s
        .setup(
            Db::builder()
                .lookup(Lookup::new("states"))
                .lookup(Lookup::new("statuses"))
                .table(
                    Table::builder("addresses")
                        .belongs_to("state", "states")
                        .build(),
                ),
        )
        .await;

    db.create("statuses", Record::new().with("name", "active"))
        .await
        .unwrap();
    let active = db
        .lookup("statuses")
        .unwrap()
        .resolve_entity(&db, "active")
        .await
        .unwrap()
        .unwrap();

    let mut address = Instance::new("addresses");
    let err = db
        .assign(&mut address, "state", active)
        .await
        .unwrap_err();
    assert!(err.is_invalid_schema());
    assert!(address.get("state_id").is_null());
}

async fn assigning_without_implicit_create(s: impl Setup) {
    let db = s
        .setup(states_and_addresses().implicit_create(false))
        .await;

    let mut address = Instance::new("addresses");
    db.assign(&mut address, "state", "ga").await.unwrap();

    assert_eq!(count_states(&db, "ga").await, 0);
    assert_eq!(address.get("state_id"), &Value::from("ga"));

    let err = db.save(&mut address).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "validation failed: `state_id` expected Id, got String"
    );
}

async fn invalid_key_falls_back_to_raw_value(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;
    let long_key = "x".repeat(51);

    let mut address = Instance::new("addresses");
    db.assign(&mut address, "state", long_key.as_str())
        .await
        .unwrap();

    assert_eq!(address.get("state_id"), &Value::from(long_key.as_str()));
    assert!(db.save(&mut address).await.unwrap_err().is_validation());
}

async fn assigning_to_a_plain_field(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;

    let mut address = Instance::new("addresses");
    let err = db
        .assign(&mut address, "country", "us")
        .await
        .unwrap_err();
    assert!(err.is_unsupported_accessor());
}

async fn driver_failure_during_create_propagates(s: impl Setup) {
    let driver = Box::new(FailingDriver::new(s.driver(), "states"));
    let db = s.setup_with(states_and_addresses(), driver).await;

    let mut address = Instance::new("addresses");
    let err = db
        .assign(&mut address, "state", "ga")
        .await
        .unwrap_err();

    assert!(err.is_driver_operation_failed());
    assert!(!err.is_validation());
    assert_eq!(err.to_string(), "disk I/O error");
    assert!(address.get("state_id").is_null());
    assert_eq!(count_states(&db, "ga").await, 0);
}

tests!(
    assigning_unseen_key_creates_row,
    created_row_uses_storage_form,
    reassigning_does_not_duplicate,
    assigning_existing_key_uses_its_id,
    assigning_a_row,
    assigning_a_row_of_another_table,
    assigning_without_implicit_create,
    invalid_key_falls_back_to_raw_value,
    assigning_to_a_plain_field,
    driver_failure_during_create_propagates,
);
