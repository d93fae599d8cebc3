use lookup::{LookupEntity, Resolved};
use pretty_assertions::assert_eq;
use tests::*;

async fn resolve_record_normalizes_keys(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;
    let ut = create_state(&db, "ut", Some("Utah")).await;
    let states = db.lookup("states").unwrap();

    for key in ["UT", "ut", "Ut", "uT"] {
        let row = states.resolve_record(&db, key).await.unwrap().unwrap();
        assert_eq!(Some(row.id()), ut.id(), "key={key:?}");
    }
}

async fn resolve_record_space_and_underscore(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;
    let ny = create_state(&db, "new york", None).await;
    let states = db.lookup("states").unwrap();

    for key in ["new york", "new_york", "New York", "NEW_YORK"] {
        let row = states.resolve_record(&db, key).await.unwrap().unwrap();
        assert_eq!(Some(row.id()), ny.id(), "key={key:?}");
        assert_eq!(row.name(), "new york");
    }
}

async fn missing_key_resolves_to_none(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;
    create_state(&db, "ut", None).await;
    let states = db.lookup("states").unwrap();

    assert!(states.resolve_record(&db, "zz").await.unwrap().is_none());
    assert!(states
        .resolve_attribute(&db, "zz", "id")
        .await
        .unwrap()
        .is_none());
    assert!(states.resolve(&db, "zz", "object").await.unwrap().is_none());
}

async fn bogus_attribute_is_unsupported(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;
    create_state(&db, "ut", None).await;
    let states = db.lookup("states").unwrap();

    let err = states
        .resolve_attribute(&db, "ut", "bogus_field")
        .await
        .unwrap_err();
    assert!(err.is_unsupported_accessor());
    assert!(!err.is_record_not_found());
    assert_eq!(
        err.to_string(),
        "unsupported accessor: `bogus_field` is not a lookup attribute of `states`"
    );

    // Reported even when the key doesn't exist
    let err = states
        .resolve_attribute(&db, "zz", "bogus_field")
        .await
        .unwrap_err();
    assert!(err.is_unsupported_accessor());
}

async fn resolve_attributes_of_utah(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;
    let ut = create_state(&db, "ut", Some("Utah")).await;
    assert_eq!(ut.id(), Some(1));

    let states = db.lookup("states").unwrap();

    assert_eq!(
        states.resolve_attribute(&db, "UT", "description").await.unwrap(),
        Some(Value::from("Utah"))
    );
    assert_eq!(
        states.resolve_attribute(&db, "UT", "id").await.unwrap(),
        Some(Value::I64(1))
    );
    assert_eq!(
        states.resolve_attribute(&db, "ut", "enabled").await.unwrap(),
        Some(Value::Bool(true))
    );

    match states.resolve(&db, "Ut", "object").await.unwrap() {
        Some(Resolved::Row(row)) => {
            assert_eq!(row.id(), 1);
            assert_eq!(row.to_string(), "ut");
        }
        other => panic!("expected a row; got {other:?}"),
    }

    assert_eq!(
        states.resolve(&db, "Ut", "sort_order").await.unwrap(),
        Some(Resolved::Value(Value::I64(0)))
    );
}

async fn recognized_attributes_include_id(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;
    let states = db.lookup("states").unwrap();

    let attributes: Vec<_> = states.recognized_attributes().collect();
    assert_eq!(
        attributes,
        ["id", "name", "description", "enabled", "sort_order"]
    );
    assert!(states.recognizes("Description"));
    assert!(!states.recognizes("bogus_field"));
}

async fn options_are_enabled_rows_in_display_order(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;

    for (name, sort_order, enabled) in [
        ("wy", 1, true),
        ("ut", 0, true),
        ("az", 1, true),
        ("nv", 0, false),
    ] {
        db.create(
            "states",
            Record::new()
                .with("name", name)
                .with("sort_order", sort_order)
                .with("enabled", enabled),
        )
        .await
        .unwrap();
    }

    let options = db.lookup("states").unwrap().options(&db).await.unwrap();
    let names: Vec<_> = options.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["ut", "az", "wy"]);

    let (_, ut_id) = &options[0];
    assert_eq!(*ut_id, 2);
}

async fn custom_key_column(s: impl Setup) {
    use lookup::schema::{Column, Index};
    use lookup::stmt::Type;

    let statuses = Table::builder("statuses")
        .column(Column::new("code", Type::String).not_null().not_blank())
        .column(Column::new("label", Type::Text))
        .index(Index::new("index_statuses_by_code", ["code"]).unique())
        .build();

    let db = s
        .setup(Db::builder().lookup(Lookup::with_table(statuses).key_column("code")))
        .await;

    db.create(
        "statuses",
        Record::new()
            .with("code", "on hold")
            .with("label", "On hold"),
    )
    .await
    .unwrap();

    let statuses = db.lookup("statuses").unwrap();
    assert_eq!(statuses.key_column(), "code");
    assert_eq!(
        statuses.resolve_attribute(&db, "ON_HOLD", "label").await.unwrap(),
        Some(Value::from("On hold"))
    );
}

async fn entity_configured_outside_the_db(s: impl Setup) {
    let db = s.setup(states_and_addresses()).await;
    create_state(&db, "ut", None).await;

    // Same table name as the db's lookup table
    let states = LookupEntity::configure(&Table::lookup("states"), "name").unwrap();
    let ut = states.resolve_record(&db, "UT").await.unwrap().unwrap();
    assert_eq!(ut.name(), "ut");
    assert_eq!(states.options(&db).await.unwrap(), [("ut".to_string(), ut.id())]);

    // A table the db doesn't know
    let countries = LookupEntity::configure(&Table::lookup("countries"), "name").unwrap();
    let err = countries.resolve_record(&db, "us").await.unwrap_err();
    assert!(err.is_invalid_schema());
    assert_eq!(err.to_string(), "invalid schema: unknown table `countries`");
    assert!(countries.options(&db).await.unwrap_err().is_invalid_schema());
}

tests!(
    resolve_record_normalizes_keys,
    resolve_record_space_and_underscore,
    missing_key_resolves_to_none,
    bogus_attribute_is_unsupported,
    resolve_attributes_of_utah,
    recognized_attributes_include_id,
    options_are_enabled_rows_in_display_order,
    custom_key_column,
    entity_configured_outside_the_db,
);
