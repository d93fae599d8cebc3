use lookup_core::stmt::{Record, Value};

/// One row of any table, either loaded from the database or waiting to be
/// inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    table: String,
    record: Record,
    persisted: bool,
}

impl Instance {
    /// A new, unsaved row of `table` with no columns set.
    pub fn new(table: impl Into<String>) -> Instance {
        Instance::from_record(table, Record::new())
    }

    /// A new, unsaved row of `table` with the given column values.
    pub fn from_record(table: impl Into<String>, record: Record) -> Instance {
        Instance {
            table: table.into(),
            record,
            persisted: false,
        }
    }

    pub(crate) fn load(table: impl Into<String>, record: Record) -> Instance {
        Instance {
            table: table.into(),
            record,
            persisted: true,
        }
    }

    /// Replace the column values with the row as stored.
    pub(crate) fn loaded(&mut self, record: Record) {
        self.record = record;
        self.persisted = true;
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn id(&self) -> Option<i64> {
        self.record.get("id").and_then(Value::as_i64)
    }

    /// The column value, or `Null` when the column has not been set.
    pub fn get(&self, column: &str) -> &Value {
        self.record.get_or_null(column)
    }

    /// Plain column assignment. Relationship fields backed by a lookup table
    /// should go through `Db::assign` instead, which resolves keys.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.record.insert(column, value);
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(column, value);
        self
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn into_record(self) -> Record {
        self.record
    }

    pub fn is_persisted(&self) -> bool {
        self.persisted
    }
}
