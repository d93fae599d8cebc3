use super::Statement;

use lookup_core::{schema::TableId, stmt::Record};

/// `INSERT ... RETURNING` every column of the table.
#[derive(Debug, Clone)]
pub struct Insert {
    pub table: TableId,
    pub values: Record,
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
