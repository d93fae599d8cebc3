use super::{column_def::ColumnDef, value::Param, Comma, Formatter, Ident, Params, ToSql};

use crate::stmt::{self, Statement};

use lookup_core::stmt::Value;

impl ToSql for &Statement {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Statement::CreateIndex(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = f.serializer.table(self.table);
        let name = f.serializer.table_name(self.table);
        let columns = Comma(table.columns.iter().map(|column| ColumnDef {
            column,
            primary_key: column.name == table.primary_key,
        }));

        fmt!(f, "CREATE TABLE " name " (" columns ")");
    }
}

impl ToSql for &stmt::CreateIndex {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = f.serializer.table(self.on);
        let index = &table.indices[self.index];
        let name = f.serializer.index_name(&index.name);
        let on = f.serializer.table_name(self.on);
        let columns = Comma(index.columns.iter().map(Ident));
        let unique = if index.unique { "UNIQUE " } else { "" };

        fmt!(f, "CREATE " unique "INDEX " name " ON " on " (" columns ")");
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = f.serializer.table(self.table);
        let name = f.serializer.table_name(self.table);
        let columns = Comma(table.columns.iter().map(|column| Ident(&column.name)));

        fmt!(f, "SELECT " columns " FROM " name);

        if !self.filter.is_empty() {
            fmt!(f, " WHERE ");
            let mut s = "";
            for (column, value) in self.filter.iter() {
                fmt!(f, s);
                Condition { column, value }.to_sql(f);
                s = " AND ";
            }
        }

        if !self.order_by.is_empty() {
            let order_by = Comma(self.order_by.iter().map(Ident));
            fmt!(f, " ORDER BY " order_by);
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = f.serializer.table(self.table);
        let name = f.serializer.table_name(self.table);
        let returning = Comma(table.columns.iter().map(|column| Ident(&column.name)));

        if self.values.is_empty() {
            fmt!(f, "INSERT INTO " name " DEFAULT VALUES");
        } else {
            let columns = Comma(self.values.columns().map(Ident));
            let values = Comma(self.values.iter().map(|(_, value)| Param(value)));
            fmt!(f, "INSERT INTO " name " (" columns ") VALUES (" values ")");
        }

        fmt!(f, " RETURNING " returning);
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = f.serializer.table(self.table);
        let name = f.serializer.table_name(self.table);
        let assignments = Comma(
            self.assignments
                .iter()
                .map(|(column, value)| Assignment { column, value }),
        );
        let key = Condition {
            column: &table.primary_key,
            value: &self.key,
        };

        fmt!(f, "UPDATE " name " SET " assignments " WHERE " key);
    }
}

/// `"column" = ?N`, or `"column" IS NULL` for a null value
struct Condition<'a> {
    column: &'a str,
    value: &'a Value,
}

impl ToSql for Condition<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        if self.value.is_null() {
            fmt!(f, Ident(self.column) " IS NULL");
        } else {
            fmt!(f, Ident(self.column) " = " Param(self.value));
        }
    }
}

struct Assignment<'a> {
    column: &'a str,
    value: &'a Value,
}

impl ToSql for Assignment<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, Ident(self.column) " = " Param(self.value));
    }
}
