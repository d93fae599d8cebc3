#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod column_def;
mod statement;
mod value;

use crate::stmt::Statement;

use lookup_core::schema::{Schema, Table, TableId};

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Schema against which the statement is to be serialized
    schema: &'a Schema,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl<'a> Serializer<'a> {
    pub fn sqlite(schema: &'a Schema) -> Serializer<'a> {
        Serializer { schema }
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    fn table(&self, id: TableId) -> &'a Table {
        self.schema.table(id)
    }

    fn table_name(&self, id: TableId) -> Ident<String> {
        Ident(self.schema.storage_name(id))
    }

    fn index_name(&self, name: &str) -> Ident<String> {
        match &self.schema.table_name_prefix {
            Some(prefix) => Ident(format!("{prefix}{name}")),
            None => Ident(name.to_string()),
        }
    }
}
