use super::{BelongsTo, Column, Index, TableBuilder};
use crate::{
    stmt::{Record, Type, Value},
    Error, Result,
};

use std::fmt;

/// A database table
#[derive(Debug, Clone)]
pub struct Table {
    /// Uniquely identifies a table within its schema
    pub id: TableId,

    /// Name of the table, without any prefix
    pub name: String,

    /// The table's columns
    pub columns: Vec<Column>,

    /// Name of the primary key column
    pub primary_key: String,

    pub indices: Vec<Index>,

    /// Relationships declared by this table
    pub relations: Vec<BelongsTo>,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct TableId(pub usize);

impl Table {
    pub fn builder(name: impl Into<String>) -> TableBuilder {
        TableBuilder::new(name)
    }

    /// A lookup table with the standard shape: a unique `name`, an optional
    /// `description`, an `enabled` flag and a `sort_order`.
    pub fn lookup(name: impl Into<String>) -> Table {
        let name = name.into();
        let index = Index::new(format!("index_{name}_by_name"), ["name"]).unique();

        TableBuilder::new(name)
            .column(
                Column::new("name", Type::String)
                    .max_length(50)
                    .not_null()
                    .not_blank(),
            )
            .column(Column::new("description", Type::Text))
            .column(Column::new("enabled", Type::Bool).not_null().default(true))
            .column(Column::new("sort_order", Type::I64).not_null().default(0))
            .index(index)
            .build()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn resolve_column(&self, name: &str) -> Result<&Column> {
        self.column(name).ok_or_else(|| {
            Error::invalid_schema(format!("table `{}` has no column `{name}`", self.name))
        })
    }

    pub fn relation(&self, field: &str) -> Option<&BelongsTo> {
        self.relations.iter().find(|relation| relation.field == field)
    }

    /// Returns `true` if `column` is covered by a single-column unique index.
    pub fn is_unique(&self, column: &str) -> bool {
        self.indices
            .iter()
            .any(|index| index.unique && index.columns.len() == 1 && index.columns[0] == column)
    }

    /// Checks that every column referenced by the primary key, the indices
    /// and the relationships exists.
    pub(crate) fn verify(&self) -> Result<()> {
        self.resolve_column(&self.primary_key)?;

        for index in &self.indices {
            for column in &index.columns {
                self.resolve_column(column)?;
            }
        }

        for relation in &self.relations {
            let column = self.resolve_column(&relation.foreign_key)?;
            if column.ty != Type::Id {
                return Err(Error::invalid_schema(format!(
                    "foreign key `{}.{}` must be an Id column",
                    self.name, column.name
                )));
            }
        }

        Ok(())
    }

    /// Validates `record` before it is written.
    ///
    /// On insert, every column that is neither nullable, defaulted nor
    /// auto-incremented must be present.
    pub fn validate(&self, record: &Record, insert: bool) -> Result<()> {
        for (name, value) in record.iter() {
            let column = self.resolve_column(name)?;

            if !column.ty.accepts(value) {
                return Err(Error::validation_type(
                    name,
                    column.ty.to_string(),
                    value.variant_name(),
                ));
            }

            match value {
                Value::Null if !column.nullable => {
                    return Err(Error::validation_presence(name));
                }
                Value::String(s) => {
                    if !column.allow_blank && s.trim().is_empty() {
                        return Err(Error::validation_presence(name));
                    }

                    let len = s.chars().count();
                    if column.max_length.is_some_and(|max| len > max) {
                        return Err(Error::validation_length(name, len, None, column.max_length));
                    }
                }
                _ => {}
            }
        }

        if insert {
            for column in &self.columns {
                if !column.is_optional_on_insert() && !record.contains(&column.name) {
                    return Err(Error::validation_presence(&column.name));
                }
            }
        }

        Ok(())
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
