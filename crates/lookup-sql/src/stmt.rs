mod create_index;
pub use create_index::CreateIndex;

mod create_table;
pub use create_table::CreateTable;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

use lookup_core::driver::Operation;

#[derive(Debug, Clone)]
pub enum Statement {
    CreateIndex(CreateIndex),
    CreateTable(CreateTable),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// Returns `true` if executing the statement yields rows.
    pub fn returns_rows(&self) -> bool {
        matches!(self, Statement::Insert(_) | Statement::Select(_))
    }
}

impl From<Operation> for Statement {
    fn from(value: Operation) -> Self {
        match value {
            Operation::FindBy(op) => Select {
                table: op.table,
                filter: op.filter,
                order_by: op.order_by,
            }
            .into(),
            Operation::GetByKey(op) => Select::by_key(op.table, op.key).into(),
            Operation::Insert(op) => Insert {
                table: op.table,
                values: op.values,
            }
            .into(),
            Operation::UpdateByKey(op) => Update {
                table: op.table,
                key: op.key,
                assignments: op.assignments,
            }
            .into(),
        }
    }
}
