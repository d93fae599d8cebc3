mod builder;
pub use builder::TableBuilder;

mod column;
pub use column::Column;

mod index;
pub use index::Index;

mod relation;
pub use relation::BelongsTo;

mod table;
pub use table::{Table, TableId};

use crate::{Error, Result};

use std::collections::HashSet;

/// The set of tables known to a `Db`.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    pub tables: Vec<Table>,

    /// Prefix prepended to every table name when talking to the database.
    pub table_name_prefix: Option<String>,
}

impl Schema {
    /// Builds a schema from table definitions, assigning table identifiers
    /// in declaration order.
    ///
    /// Relationship targets are *not* checked here: a relationship may point
    /// at a table this schema does not know about, and it is up to the layer
    /// above to decide what that means.
    pub fn new(tables: Vec<Table>, table_name_prefix: Option<String>) -> Result<Schema> {
        let mut names = HashSet::new();
        let mut tables = tables;

        for (index, table) in tables.iter_mut().enumerate() {
            if !names.insert(table.name.clone()) {
                return Err(Error::invalid_schema(format!(
                    "table `{}` is declared more than once",
                    table.name
                )));
            }

            table.id = TableId(index);
            table.verify()?;
        }

        Ok(Schema {
            tables,
            table_name_prefix,
        })
    }

    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        self.tables.get(id.into().0).expect("invalid table ID")
    }

    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Like [`Schema::table_by_name`], but reports an unknown table as an
    /// invalid schema error.
    pub fn resolve_table(&self, name: &str) -> Result<&Table> {
        self.table_by_name(name)
            .ok_or_else(|| Error::invalid_schema(format!("unknown table `{name}`")))
    }

    /// The table's name as stored in the database.
    pub fn storage_name(&self, id: impl Into<TableId>) -> String {
        let table = self.table(id);
        match &self.table_name_prefix {
            Some(prefix) => format!("{prefix}{}", table.name),
            None => table.name.clone(),
        }
    }
}
