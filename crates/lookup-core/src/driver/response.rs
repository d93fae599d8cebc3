use crate::{stmt::Record, Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, as a list of rows
    Values(Vec<Record>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn values(values: Vec<Record>) -> Self {
        Self {
            rows: Rows::Values(values),
        }
    }
}

impl Rows {
    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            Rows::Values(_) => Err(Error::from_args(format_args!(
                "invalid result: expected a row count, got rows"
            ))),
        }
    }

    pub fn into_values(self) -> Result<Vec<Record>> {
        match self {
            Rows::Values(values) => Ok(values),
            Rows::Count(count) => Err(Error::from_args(format_args!(
                "invalid result: expected rows, got a count of {count}"
            ))),
        }
    }
}
