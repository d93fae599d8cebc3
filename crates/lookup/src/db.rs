mod builder;
mod connect;

pub use builder::Builder;
pub use connect::Connect;

use crate::{
    lookup::LookupEntity,
    referrer::{AssignValue, CreateConflict, LookupReferrer},
    Instance,
};

use lookup_core::{
    driver::{
        operation::{FindBy, GetByKey, Insert, UpdateByKey},
        Connection, Operation, Response,
    },
    schema::{Schema, Table},
    stmt::{Record, Value},
    Error, Result,
};
use indexmap::IndexMap;
use tokio::sync::Mutex;

use std::sync::Arc;

/// Settings that shape how lookups behave, fixed when the `Db` is built.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) create_conflict: CreateConflict,
    pub(crate) implicit_create: bool,
}

/// Shared state between all `Db` clones.
pub(crate) struct Shared {
    pub(crate) schema: Arc<Schema>,
    pub(crate) lookups: IndexMap<String, LookupEntity>,
    pub(crate) referrers: IndexMap<String, LookupReferrer>,
    pub(crate) config: Config,
    connection: Mutex<Box<dyn Connection>>,
}

/// A database handle. Clones share the schema, the lookup registry and the
/// underlying connection; operations on one connection run one at a time.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.shared.schema
    }

    pub(crate) fn config(&self) -> &Config {
        &self.shared.config
    }

    /// Create every declared table and index. Meant for fresh databases.
    pub async fn push_schema(&self) -> Result<()> {
        let mut connection = self.shared.connection.lock().await;
        connection.push_schema(&self.shared.schema).await
    }

    /// Execute a driver operation directly.
    pub async fn exec(&self, op: impl Into<Operation>) -> Result<Response> {
        let op = op.into();
        tracing::debug!(op = op.name(), "exec");

        let mut connection = self.shared.connection.lock().await;
        connection.exec(&self.shared.schema, op).await
    }

    /// The lookup table named `table`.
    pub fn lookup(&self, table: &str) -> Result<&LookupEntity> {
        self.shared.lookups.get(table).ok_or_else(|| {
            Error::invalid_schema(format!("`{table}` is not configured as a lookup table"))
        })
    }

    /// Returns `true` if `table` is configured as a lookup table.
    pub fn is_lookup(&self, table: &str) -> bool {
        self.shared.lookups.contains_key(table)
    }

    /// The lookup relationships of `table`. Every declared table has one,
    /// possibly with no relationships.
    pub fn referrer(&self, table: &str) -> Result<&LookupReferrer> {
        self.shared
            .referrers
            .get(table)
            .ok_or_else(|| Error::invalid_schema(format!("unknown table `{table}`")))
    }

    /// Find the rows of `table` whose lookup relationship `accessor` points at
    /// the row keyed by `key`. See [`LookupReferrer::find_by`].
    pub async fn find_by(&self, table: &str, accessor: &str, key: &str) -> Result<Vec<Instance>> {
        self.referrer(table)?.find_by(self, accessor, key).await
    }

    /// Assign a lookup relationship of `instance` by key or by row. See
    /// [`LookupReferrer::assign`].
    pub async fn assign(
        &self,
        instance: &mut Instance,
        field: &str,
        value: impl Into<AssignValue>,
    ) -> Result<()> {
        self.referrer(instance.table())?
            .assign(self, instance, field, value.into())
            .await
    }

    /// Insert a new row into `table`.
    pub async fn create(&self, table: &str, values: Record) -> Result<Instance> {
        let mut instance = Instance::from_record(table, values);
        self.save(&mut instance).await?;
        Ok(instance)
    }

    /// Persist `instance`: insert it if it is new, otherwise update every
    /// non-key column. The instance is refreshed with the stored row.
    pub async fn save(&self, instance: &mut Instance) -> Result<()> {
        let table = self.shared.schema.resolve_table(instance.table())?;

        if instance.is_persisted() {
            let key = instance.get(&table.primary_key).clone();
            let assignments: Record = instance
                .record()
                .iter()
                .filter(|(column, _)| *column != table.primary_key)
                .map(|(column, value)| (column, value.clone()))
                .collect();

            table.validate(&assignments, false)?;

            // Nothing to write; the row only has to still be there
            let found = if assignments.is_empty() {
                !self
                    .exec(GetByKey {
                        table: table.id,
                        key: key.clone(),
                    })
                    .await?
                    .rows
                    .into_values()?
                    .is_empty()
            } else {
                let count = self
                    .exec(UpdateByKey {
                        table: table.id,
                        key: key.clone(),
                        assignments,
                    })
                    .await?
                    .rows
                    .into_count()?;
                count > 0
            };

            if !found {
                return Err(Error::record_not_found(format!(
                    "table={} key={key}",
                    table.name
                )));
            }
        } else {
            table.validate(instance.record(), true)?;

            let row = self
                .exec(Insert {
                    table: table.id,
                    values: instance.record().clone(),
                })
                .await?
                .rows
                .into_values()?
                .into_iter()
                .next()
                .ok_or_else(|| lookup_core::err!("insert returned no row"))?;

            instance.loaded(row);
        }

        Ok(())
    }

    /// Load the row of `table` with primary key `id`.
    pub async fn get(&self, table: &str, id: i64) -> Result<Instance> {
        let resolved = self.shared.schema.resolve_table(table)?;

        self.exec(GetByKey {
            table: resolved.id,
            key: Value::I64(id),
        })
        .await?
        .rows
        .into_values()?
        .into_iter()
        .next()
        .map(|row| Instance::load(table, row))
        .ok_or_else(|| Error::record_not_found(format!("table={table} key={id}")))
    }

    /// All rows of `table` where `column` equals `value`.
    pub async fn find_by_column(
        &self,
        table: &str,
        column: &str,
        value: impl Into<Value>,
    ) -> Result<Vec<Instance>> {
        let resolved = self.shared.schema.resolve_table(table)?;
        resolved.resolve_column(column)?;

        self.find(resolved, Record::new().with(column, value), vec![])
            .await
    }

    pub(crate) async fn find(
        &self,
        table: &Table,
        filter: Record,
        order_by: Vec<String>,
    ) -> Result<Vec<Instance>> {
        let rows = self
            .exec(FindBy {
                table: table.id,
                filter,
                order_by,
            })
            .await?
            .rows
            .into_values()?;

        Ok(rows
            .into_iter()
            .map(|row| Instance::load(&table.name, row))
            .collect())
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("tables", &self.shared.schema.tables.len())
            .field("lookups", &self.shared.lookups.keys().collect::<Vec<_>>())
            .finish()
    }
}
