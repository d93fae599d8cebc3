use super::Statement;

use lookup_core::schema::TableId;

#[derive(Debug, Clone)]
pub struct CreateIndex {
    /// Which table to index
    pub on: TableId,

    /// Position of the index in the table's index list
    pub index: usize,
}

impl Statement {
    pub fn create_index(on: TableId, index: usize) -> Self {
        CreateIndex { on, index }.into()
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
