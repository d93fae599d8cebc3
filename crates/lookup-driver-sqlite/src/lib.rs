mod value;
pub(crate) use value::Value;

use lookup_core::{
    async_trait,
    driver::{Driver, Operation, Response},
    schema::{Schema, Table, TableId},
    stmt::{self, Record},
    Error, Result,
};
use lookup_sql as sql;
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::Arc,
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    async fn connect(&self) -> Result<Box<dyn lookup_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }
}

#[async_trait]
impl lookup_core::driver::Connection for Connection {
    async fn exec(&mut self, schema: &Arc<Schema>, op: Operation) -> Result<Response> {
        let table_id = match &op {
            Operation::FindBy(op) => op.table,
            Operation::GetByKey(op) => op.table,
            Operation::Insert(op) => op.table,
            Operation::UpdateByKey(op) => op.table,
        };
        let table = schema.table(table_id);

        let stmt = sql::Statement::from(op);
        let mut params: Vec<stmt::Value> = vec![];
        let sql_str = sql::Serializer::sqlite(schema).serialize(&stmt, &mut params);

        tracing::debug!(sql = %sql_str, params = params.len(), "sqlite exec");

        let mut prepared = self
            .connection
            .prepare_cached(&sql_str)
            .map_err(Error::driver_operation_failed)?;

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        if !stmt.returns_rows() {
            let count = prepared
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(|err| map_error(schema, table_id, err))?;

            return Ok(Response::count(count as _));
        }

        let mut rows = prepared
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(|err| map_error(schema, table_id, err))?;

        let mut ret = vec![];

        loop {
            match rows.next() {
                Ok(Some(row)) => ret.push(load_row(table, row)?),
                Ok(None) => break,
                Err(err) => return Err(map_error(schema, table_id, err)),
            }
        }

        Ok(Response::values(ret))
    }

    async fn push_schema(&mut self, schema: &Schema) -> Result<()> {
        for table in &schema.tables {
            self.create_table(schema, table)?;
        }

        Ok(())
    }
}

impl Connection {
    fn create_table(&mut self, schema: &Schema, table: &Table) -> Result<()> {
        let serializer = sql::Serializer::sqlite(schema);

        let mut params: Vec<stmt::Value> = vec![];
        let stmt = serializer.serialize(&sql::Statement::create_table(table.id), &mut params);
        debug_assert!(params.is_empty());

        self.connection
            .execute(&stmt, [])
            .map_err(Error::driver_operation_failed)?;

        for index in 0..table.indices.len() {
            let stmt =
                serializer.serialize(&sql::Statement::create_index(table.id, index), &mut params);
            debug_assert!(params.is_empty());

            self.connection
                .execute(&stmt, [])
                .map_err(Error::driver_operation_failed)?;
        }

        Ok(())
    }
}

fn load_row(table: &Table, row: &rusqlite::Row<'_>) -> Result<Record> {
    let mut record = Record::new();

    for (index, column) in table.columns.iter().enumerate() {
        let value =
            Value::from_sql(row, index, &column.ty).map_err(Error::driver_operation_failed)?;
        record.insert(&column.name, value.into_inner());
    }

    Ok(record)
}

/// Maps unique constraint violations to validation errors; everything else
/// is a driver failure.
fn map_error(schema: &Schema, table: TableId, err: rusqlite::Error) -> Error {
    if let rusqlite::Error::SqliteFailure(failure, Some(message)) = &err {
        if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE {
            // "UNIQUE constraint failed: states.name"
            let column = message
                .rsplit_once('.')
                .map(|(_, column)| column.to_string())
                .unwrap_or_default();
            return Error::validation_uniqueness(&schema.table(table).name, column);
        }
    }

    Error::driver_operation_failed(err)
}
