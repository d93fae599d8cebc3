mod find_by;
pub use find_by::FindBy;

mod get_by_key;
pub use get_by_key::GetByKey;

mod insert;
pub use insert::Insert;

mod update_by_key;
pub use update_by_key::UpdateByKey;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Query the table with a conjunction of column equalities
    FindBy(FindBy),

    /// Get a record by its primary key
    GetByKey(GetByKey),

    /// Create a new record, returning it as stored
    Insert(Insert),

    /// Update a record by the primary key
    UpdateByKey(UpdateByKey),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::FindBy(_) => "find_by",
            Operation::GetByKey(_) => "get_by_key",
            Operation::Insert(_) => "insert",
            Operation::UpdateByKey(_) => "update_by_key",
        }
    }
}
