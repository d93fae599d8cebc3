use super::Statement;

use lookup_core::schema::TableId;

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Table to create; columns and the primary key come from the schema
    pub table: TableId,
}

impl Statement {
    pub fn create_table(table: TableId) -> Self {
        CreateTable { table }.into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
