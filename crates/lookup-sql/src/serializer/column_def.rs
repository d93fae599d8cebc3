use super::{value::Literal, Formatter, Ident, Params, ToSql};

use lookup_core::{schema::Column, stmt::Type};

pub(super) struct ColumnDef<'a> {
    pub(super) column: &'a Column,
    pub(super) primary_key: bool,
}

impl ToSql for ColumnDef<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = self.column;
        let ty = match (column.ty, column.max_length) {
            (Type::Id | Type::I64, _) => "INTEGER".to_string(),
            (Type::Bool, _) => "BOOLEAN".to_string(),
            (Type::String, Some(max)) => format!("VARCHAR({max})"),
            (Type::String | Type::Text, _) => "TEXT".to_string(),
        };

        fmt!(f, Ident(&column.name) " " ty.as_str());

        if self.primary_key {
            fmt!(f, " PRIMARY KEY");
            if column.auto_increment {
                fmt!(f, " AUTOINCREMENT");
            }
        }

        if !column.nullable {
            fmt!(f, " NOT NULL");
        }

        if let Some(default) = &column.default {
            fmt!(f, " DEFAULT " Literal(default));
        }
    }
}
