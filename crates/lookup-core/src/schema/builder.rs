use super::{BelongsTo, Column, Index, Table, TableId};
use crate::stmt::Type;

/// Builds a [`Table`]. Every table gets an auto-incremented `id` primary key.
#[derive(Debug)]
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    pub fn new(name: impl Into<String>) -> TableBuilder {
        TableBuilder {
            table: Table {
                id: TableId(usize::MAX),
                name: name.into(),
                columns: vec![Column::primary_key("id")],
                primary_key: "id".to_string(),
                indices: vec![],
                relations: vec![],
            },
        }
    }

    pub fn column(mut self, column: Column) -> Self {
        self.table.columns.push(column);
        self
    }

    pub fn index(mut self, index: Index) -> Self {
        self.table.indices.push(index);
        self
    }

    /// Declares a relationship named `field` to the `target` table. The
    /// foreign key column `{field}_id` is added and indexed.
    pub fn belongs_to(mut self, field: impl Into<String>, target: impl Into<String>) -> Self {
        let field = field.into();
        let foreign_key = format!("{field}_id");

        self.table.columns.push(Column::new(&foreign_key, Type::Id));
        self.table.indices.push(Index::new(
            format!("index_{}_by_{foreign_key}", self.table.name),
            [foreign_key.clone()],
        ));
        self.table.relations.push(BelongsTo {
            field,
            foreign_key,
            target: target.into(),
        });
        self
    }

    pub fn build(self) -> Table {
        self.table
    }
}
