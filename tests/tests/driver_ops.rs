use lookup::driver::Operation;
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use tests::*;

async fn setup_logged(s: &impl Setup) -> (Db, Arc<Mutex<Vec<DriverOp>>>) {
    let driver = LoggingDriver::new(s.driver());
    let log = driver.ops_log_handle();
    let db = s.setup_with(states_and_addresses(), Box::new(driver)).await;
    (db, log)
}

fn op_names(log: &Mutex<Vec<DriverOp>>) -> Vec<&'static str> {
    log.lock()
        .unwrap()
        .iter()
        .map(|op| op.operation.name())
        .collect()
}

async fn resolution_is_one_round_trip(s: impl Setup) {
    let (db, log) = setup_logged(&s).await;
    create_state(&db, "ut", None).await;
    log.lock().unwrap().clear();

    let states = db.lookup("states").unwrap();
    states.resolve_attribute(&db, "UT", "id").await.unwrap();

    let ops = log.lock().unwrap().clone();
    assert_eq!(ops.len(), 1);
    match &ops[0].operation {
        Operation::FindBy(find_by) => {
            assert_eq!(find_by.filter.get_or_null("name"), &Value::from("ut"));
        }
        op => panic!("expected FindBy; got {op:?}"),
    }
}

async fn unsupported_accessor_skips_the_database(s: impl Setup) {
    let (db, log) = setup_logged(&s).await;

    let states = db.lookup("states").unwrap();
    assert!(states
        .resolve_attribute(&db, "ut", "bogus_field")
        .await
        .is_err());
    assert!(op_names(&log).is_empty());
}

async fn implicit_create_reads_then_inserts(s: impl Setup) {
    let (db, log) = setup_logged(&s).await;

    let mut address = Instance::new("addresses");
    db.assign(&mut address, "state", "ga").await.unwrap();
    assert_eq!(op_names(&log), ["find_by", "insert"]);

    log.lock().unwrap().clear();
    db.assign(&mut address, "state", "ga").await.unwrap();
    assert_eq!(op_names(&log), ["find_by"]);
}

tests!(
    resolution_is_one_round_trip,
    unsupported_accessor_skips_the_database,
    implicit_create_reads_then_inserts,
);
