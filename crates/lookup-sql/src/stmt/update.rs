use super::Statement;

use lookup_core::{
    schema::TableId,
    stmt::{Record, Value},
};

#[derive(Debug, Clone)]
pub struct Update {
    pub table: TableId,
    pub key: Value,
    pub assignments: Record,
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
