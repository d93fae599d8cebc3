#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    /// Index name is unique within the schema
    pub name: String,

    /// Columns included in the index
    pub columns: Vec<String>,

    /// When `true`, indexed entries are unique
    pub unique: bool,
}

impl Index {
    pub fn new(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Index {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            unique: false,
        }
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}
