use super::*;

use crate::{schema::TableId, stmt};

#[derive(Debug, Clone, PartialEq)]
pub struct GetByKey {
    /// Which table to get from
    pub table: TableId,

    /// Primary key of the record to fetch
    pub key: stmt::Value,
}

impl From<GetByKey> for Operation {
    fn from(value: GetByKey) -> Self {
        Self::GetByKey(value)
    }
}
