use lookup::driver::Driver;
use lookup_driver_sqlite::Sqlite;

use crate::{Setup, TestIsolation};

pub struct SetupSqlite {
    isolation: TestIsolation,
}

impl SetupSqlite {
    pub fn new() -> Self {
        Self {
            isolation: TestIsolation::new(),
        }
    }
}

impl Default for SetupSqlite {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Setup for SetupSqlite {
    fn driver(&self) -> Box<dyn Driver> {
        Box::new(Sqlite::in_memory())
    }

    fn table_prefix(&self) -> String {
        self.isolation.table_prefix()
    }
}
