mod row;
pub use row::LookupRow;

use crate::{key, Db};

use indexmap::IndexMap;
use lookup_core::{
    schema::Table,
    stmt::{Record, Value},
    Error, Result,
};

/// Declares a lookup table for [`Db::builder`](crate::Db::builder).
#[derive(Debug, Clone)]
pub struct Lookup {
    pub(crate) table: Table,
    pub(crate) key_column: String,
}

impl Lookup {
    /// A lookup table with the standard shape (see [`Table::lookup`]), keyed
    /// by `name`.
    pub fn new(name: impl Into<String>) -> Lookup {
        Lookup::with_table(Table::lookup(name))
    }

    /// Use a custom table definition as a lookup table, keyed by `name`.
    pub fn with_table(table: Table) -> Lookup {
        Lookup {
            table,
            key_column: "name".to_string(),
        }
    }

    pub fn key_column(mut self, column: impl Into<String>) -> Lookup {
        self.key_column = column.into();
        self
    }
}

/// A table whose rows are addressed by a human-readable key.
#[derive(Debug, Clone)]
pub struct LookupEntity {
    name: String,
    key_column: String,

    /// Normalized attribute name -> column name. Includes `id`.
    recognized_attributes: IndexMap<String, String>,
}

/// What [`LookupEntity::resolve`] found.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// The whole row, for the `object` accessor
    Row(LookupRow),

    /// A single attribute
    Value(Value),
}

impl LookupEntity {
    /// Mark `table` as a lookup table keyed by `key_column`.
    ///
    /// Recognized attributes are computed here, once, from the table's
    /// columns; later schema changes are not picked up.
    pub fn configure(table: &Table, key_column: &str) -> Result<LookupEntity> {
        let key = table.resolve_column(key_column)?;
        if !key.ty.is_string() {
            return Err(Error::invalid_schema(format!(
                "lookup key column `{}.{key_column}` must be a string column",
                table.name
            )));
        }

        let mut recognized_attributes: IndexMap<String, String> = table
            .columns
            .iter()
            .map(|column| (key::accessor(&column.name), column.name.clone()))
            .collect();
        recognized_attributes.insert("id".to_string(), table.primary_key.clone());

        Ok(LookupEntity {
            name: table.name.clone(),
            key_column: key_column.to_string(),
            recognized_attributes,
        })
    }

    pub fn table_name(&self) -> &str {
        &self.name
    }

    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    pub fn recognized_attributes(&self) -> impl Iterator<Item = &str> + '_ {
        self.recognized_attributes.keys().map(String::as_str)
    }

    /// Returns `true` if `attribute` names a column of this table.
    pub fn recognizes(&self, attribute: &str) -> bool {
        self.column_for(attribute).is_some()
    }

    fn column_for(&self, attribute: &str) -> Option<&str> {
        self.recognized_attributes
            .get(&key::accessor(attribute))
            .map(String::as_str)
    }

    /// The row whose key column matches `raw_key`, or `None`.
    pub async fn resolve_record(&self, db: &Db, raw_key: &str) -> Result<Option<LookupRow>> {
        let key = key::storage(raw_key);
        let table = self.table(db)?;

        let row = db
            .find(table, Record::new().with(&self.key_column, key.as_str()), vec![])
            .await?
            .into_iter()
            .next()
            .map(|instance| self.row(instance.into_record()))
            .transpose()?;

        tracing::debug!(
            table = %self.name,
            key = %key,
            found = row.is_some(),
            "resolve lookup"
        );

        Ok(row)
    }

    /// The full row for `raw_key`. Same as [`LookupEntity::resolve_record`].
    pub async fn resolve_entity(&self, db: &Db, raw_key: &str) -> Result<Option<LookupRow>> {
        self.resolve_record(db, raw_key).await
    }

    /// A single attribute of the row for `raw_key`.
    ///
    /// Returns `Ok(None)` when no row has that key. An attribute that is not
    /// a column of this table is an unsupported accessor error, reported
    /// without touching the database.
    pub async fn resolve_attribute(
        &self,
        db: &Db,
        raw_key: &str,
        attribute: &str,
    ) -> Result<Option<Value>> {
        let column = self
            .column_for(attribute)
            .ok_or_else(|| Error::unsupported_accessor(&self.name, attribute))?;

        Ok(self
            .resolve_record(db, raw_key)
            .await?
            .map(|row| row.get(column).clone()))
    }

    /// Generic accessor: `object` returns the row, anything else an
    /// attribute.
    pub async fn resolve(
        &self,
        db: &Db,
        raw_key: &str,
        accessor: &str,
    ) -> Result<Option<Resolved>> {
        if accessor == "object" {
            Ok(self.resolve_entity(db, raw_key).await?.map(Resolved::Row))
        } else {
            Ok(self
                .resolve_attribute(db, raw_key, accessor)
                .await?
                .map(Resolved::Value))
        }
    }

    /// Enabled rows as `(name, id)` pairs, ordered for display.
    pub async fn options(&self, db: &Db) -> Result<Vec<(String, i64)>> {
        let table = self.table(db)?;

        let mut filter = Record::new();
        if table.column("enabled").is_some() {
            filter.insert("enabled", true);
        }

        let mut order_by = vec![];
        if table.column("sort_order").is_some() {
            order_by.push("sort_order".to_string());
        }
        order_by.push(self.key_column.clone());

        db.find(table, filter, order_by)
            .await?
            .into_iter()
            .map(|instance| {
                let row = self.row(instance.into_record())?;
                Ok((row.to_string(), row.id()))
            })
            .collect()
    }

    /// Insert a row holding only `raw_key`, in storage form.
    pub(crate) async fn create_for_key(&self, db: &Db, raw_key: &str) -> Result<LookupRow> {
        let instance = db
            .create(
                &self.name,
                Record::new().with(&self.key_column, key::storage(raw_key)),
            )
            .await?;

        tracing::debug!(
            table = %self.name,
            key = raw_key,
            id = ?instance.id(),
            "created lookup row"
        );

        self.row(instance.into_record())
    }

    /// The entity's table in `db`. Looked up by name, so an entity configured
    /// from a table outside `db` resolves to an error instead of a wrong
    /// table.
    fn table<'a>(&self, db: &'a Db) -> Result<&'a Table> {
        let table = db.schema().resolve_table(&self.name)?;
        table.resolve_column(&self.key_column)?;
        Ok(table)
    }

    fn row(&self, record: Record) -> Result<LookupRow> {
        LookupRow::new(&self.name, &self.key_column, record)
    }

    pub(crate) fn owns(&self, row: &LookupRow) -> bool {
        row.table() == self.name
    }
}
