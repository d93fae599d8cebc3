use super::Statement;

use lookup_core::{
    schema::TableId,
    stmt::{Record, Value},
};

/// `SELECT` every column of the table, filtered by column equalities.
#[derive(Debug, Clone)]
pub struct Select {
    pub table: TableId,
    pub filter: Record,
    pub order_by: Vec<String>,
}

impl Select {
    /// Select the row whose primary key is `key`. The primary key column is
    /// always named `id`.
    pub fn by_key(table: TableId, key: Value) -> Self {
        Select {
            table,
            filter: Record::new().with("id", key),
            order_by: vec![],
        }
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
