use crate::key;

use lookup_core::{
    stmt::{Record, Value},
    Error, Result,
};
use regex::Regex;

use std::fmt;

/// A resolved row of a lookup table.
///
/// Two rows are equal when they come from the same lookup table and have the
/// same identifier. A row also compares equal to a key string whose
/// normalized form matches the row's key, so `row == "UT"` holds for the
/// `ut` row.
#[derive(Debug, Clone)]
pub struct LookupRow {
    table: String,
    key_column: String,
    id: i64,
    record: Record,
}

impl LookupRow {
    pub(crate) fn new(table: &str, key_column: &str, record: Record) -> Result<LookupRow> {
        let id = record.get_or_null("id").as_i64().ok_or_else(|| {
            Error::invalid_schema(format!("lookup table `{table}` row has no integer id"))
        })?;

        Ok(LookupRow {
            table: table.to_string(),
            key_column: key_column.to_string(),
            id,
            record,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Name of the lookup table the row belongs to.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The row's key, as stored.
    pub fn name(&self) -> &str {
        self.record
            .get_or_null(&self.key_column)
            .as_str()
            .unwrap_or_default()
    }

    pub fn get(&self, column: &str) -> &Value {
        self.record.get_or_null(column)
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Case-insensitive substring match against the key.
    pub fn matches(&self, needle: &str) -> bool {
        self.name().to_lowercase().contains(&needle.to_lowercase())
    }

    /// Pattern match against the key.
    pub fn matches_pattern(&self, pattern: &Regex) -> bool {
        pattern.is_match(self.name())
    }
}

impl PartialEq for LookupRow {
    fn eq(&self, other: &LookupRow) -> bool {
        self.id == other.id && self.table == other.table
    }
}

impl Eq for LookupRow {}

impl PartialEq<str> for LookupRow {
    fn eq(&self, other: &str) -> bool {
        key::eq(self.name(), other)
    }
}

impl PartialEq<&str> for LookupRow {
    fn eq(&self, other: &&str) -> bool {
        key::eq(self.name(), other)
    }
}

impl PartialEq<String> for LookupRow {
    fn eq(&self, other: &String) -> bool {
        key::eq(self.name(), other)
    }
}

impl fmt::Display for LookupRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
