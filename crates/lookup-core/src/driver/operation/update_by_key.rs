use super::*;

use crate::{
    schema::TableId,
    stmt::{Record, Value},
};

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateByKey {
    /// Which table to update
    pub table: TableId,

    /// Primary key of the record to update
    pub key: Value,

    /// Columns to assign
    pub assignments: Record,
}

impl From<UpdateByKey> for Operation {
    fn from(value: UpdateByKey) -> Self {
        Self::UpdateByKey(value)
    }
}
