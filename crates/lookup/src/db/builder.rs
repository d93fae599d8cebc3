use super::{Config, Connect, Db, Shared};
use crate::{
    lookup::{Lookup, LookupEntity},
    referrer::{CreateConflict, LookupReferrer},
};

use indexmap::IndexMap;
use lookup_core::{
    driver::Driver,
    schema::{Schema, Table},
    Result,
};
use tokio::sync::Mutex;

use std::sync::Arc;

pub struct Builder {
    tables: Vec<Table>,

    /// Lookup declarations, resolved against the schema on build
    lookups: Vec<Lookup>,

    table_name_prefix: Option<String>,

    config: Config,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            tables: vec![],
            lookups: vec![],
            table_name_prefix: None,
            config: Config {
                create_conflict: CreateConflict::default(),
                implicit_create: true,
            },
        }
    }
}

impl Builder {
    /// Declare a plain table. Its relationships to lookup tables are
    /// registered when the `Db` is built.
    pub fn table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    /// Declare a lookup table.
    pub fn lookup(mut self, lookup: Lookup) -> Self {
        self.tables.push(lookup.table.clone());
        self.lookups.push(lookup);
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(mut self, prefix: &str) -> Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    /// What to do when implicitly creating a lookup row fails.
    pub fn create_conflict(mut self, create_conflict: CreateConflict) -> Self {
        self.config.create_conflict = create_conflict;
        self
    }

    /// Whether assigning an unknown key creates the lookup row. Defaults to
    /// `true`.
    pub fn implicit_create(mut self, implicit_create: bool) -> Self {
        self.config.implicit_create = implicit_create;
        self
    }

    pub fn build_schema(&self) -> Result<Schema> {
        Schema::new(self.tables.clone(), self.table_name_prefix.clone())
    }

    pub async fn connect(self, url: &str) -> Result<Db> {
        self.build(Connect::new(url)?).await
    }

    pub async fn build(self, driver: impl Driver) -> Result<Db> {
        let schema = Arc::new(self.build_schema()?);

        let mut lookups = IndexMap::new();
        for lookup in &self.lookups {
            let table = schema.resolve_table(&lookup.table.name)?;
            let entity = LookupEntity::configure(table, &lookup.key_column)?;
            lookups.insert(table.name.clone(), entity);
        }

        let referrers = schema
            .tables
            .iter()
            .map(|table| {
                let mut referrer = LookupReferrer::new(table);
                for relation in &table.relations {
                    referrer.register_lookup_relationship(&schema, &lookups, relation);
                }
                (table.name.clone(), referrer)
            })
            .collect();

        tracing::debug!(
            url = %driver.url(),
            tables = schema.tables.len(),
            lookups = lookups.len(),
            "connecting"
        );

        let connection = driver.connect().await?;

        Ok(Db {
            shared: Arc::new(Shared {
                schema,
                lookups,
                referrers,
                config: self.config,
                connection: Mutex::new(connection),
            }),
        })
    }
}
