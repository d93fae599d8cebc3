mod isolation;
mod logging;

// Re-export for use in macros - needs to be public for macro expansion
pub use lookup_test::LookupTest;

pub use failing_driver::FailingDriver;
pub use isolation::TestIsolation;
pub use logging_driver::{DriverOp, LoggingDriver};
pub use racing_driver::RacingDriver;

pub use lookup::{
    db::Builder, schema::Table, stmt::Record, stmt::Value, CreateConflict, Db, Instance, Lookup,
};

use lookup::driver::Driver;

#[async_trait::async_trait]
pub trait Setup: Send + Sync + 'static {
    /// The driver under test.
    fn driver(&self) -> Box<dyn Driver>;

    /// Prefix for every table this setup creates.
    fn table_prefix(&self) -> String;

    async fn setup(&self, builder: Builder) -> Db {
        let driver = self.driver();
        self.setup_with(builder, driver).await
    }

    /// Like `setup`, with a driver wrapping the one under test.
    async fn setup_with(&self, builder: Builder, driver: Box<dyn Driver>) -> Db {
        let db = self.connect(builder, driver).await.unwrap();
        db.push_schema().await.unwrap();
        db
    }

    async fn connect(&self, builder: Builder, driver: Box<dyn Driver>) -> lookup::Result<Db> {
        builder
            .table_name_prefix(&self.table_prefix())
            .build(driver)
            .await
    }
}

/// A `states` lookup table and an `addresses` table that belongs to it.
pub fn states_and_addresses() -> Builder {
    Db::builder()
        .lookup(Lookup::new("states"))
        .table(
            Table::builder("addresses")
                .belongs_to("state", "states")
                .build(),
        )
}

/// Insert a `states` row with an optional description.
pub async fn create_state(db: &Db, name: &str, description: Option<&str>) -> Instance {
    db.create(
        "states",
        Record::new()
            .with("name", name)
            .with("description", description),
    )
    .await
    .unwrap()
}

#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+
    ) => {
        #[cfg(feature = "sqlite")]
        mod sqlite {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::LookupTest::new(
                        $crate::db::sqlite::SetupSqlite::new()
                    );

                    test.run_test(|setup| async move {
                        super::$f(setup).await;
                    });
                }
            )*
        }
    };
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident,
        )+
    ) => {
        $crate::tests!( $(
            $( #[$attrs] )*
            $f
        ),+ );
    }
}
