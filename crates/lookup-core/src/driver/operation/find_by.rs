use super::*;

use crate::{schema::TableId, stmt::Record};

#[derive(Debug, Clone, PartialEq)]
pub struct FindBy {
    /// Which table to query
    pub table: TableId,

    /// Column equalities, all of which must hold. Empty matches every row.
    pub filter: Record,

    /// Columns to order the result by, ascending
    pub order_by: Vec<String>,
}

impl From<FindBy> for Operation {
    fn from(value: FindBy) -> Self {
        Self::FindBy(value)
    }
}
