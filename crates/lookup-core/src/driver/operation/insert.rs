use super::*;

use crate::{schema::TableId, stmt::Record};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Table to insert into
    pub table: TableId,

    /// Column values to insert. Columns left out take their default.
    pub values: Record,
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
