use crate::stmt::{Type, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The column type
    pub ty: Type,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// When `false`, blank strings are rejected on save
    pub allow_blank: bool,

    /// Maximum length of string values
    pub max_length: Option<usize>,

    /// Value stored when an insert does not set the column
    pub default: Option<Value>,

    /// True if the database assigns the value on insert
    pub auto_increment: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: Type) -> Column {
        Column {
            name: name.into(),
            ty,
            nullable: true,
            allow_blank: true,
            max_length: None,
            default: None,
            auto_increment: false,
        }
    }

    pub fn not_null(mut self) -> Column {
        self.nullable = false;
        self
    }

    pub fn not_blank(mut self) -> Column {
        self.allow_blank = false;
        self
    }

    pub fn max_length(mut self, max: usize) -> Column {
        self.max_length = Some(max);
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Column {
        self.default = Some(value.into());
        self
    }

    pub(crate) fn primary_key(name: impl Into<String>) -> Column {
        Column {
            auto_increment: true,
            ..Column::new(name, Type::Id).not_null()
        }
    }

    /// True when an insert may leave the column unset.
    pub fn is_optional_on_insert(&self) -> bool {
        self.nullable || self.default.is_some() || self.auto_increment
    }
}
