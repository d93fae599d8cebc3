use super::Value;

use std::fmt;

/// Column type, from the model layer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// An auto-incremented primary key or a foreign key referencing one
    Id,

    /// Signed 64-bit integer
    I64,

    /// Boolean
    Bool,

    /// Short string, usually bounded by a maximum length
    String,

    /// Unbounded text
    Text,
}

impl Type {
    /// Returns `true` if `value` can be stored in a column of this type.
    /// `Null` is accepted by every type; nullability is checked separately.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (Type::Id | Type::I64, Value::I64(_)) => true,
            (Type::Bool, Value::Bool(_)) => true,
            (Type::String | Type::Text, Value::String(_)) => true,
            _ => false,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Type::String | Type::Text)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::Id => "Id",
            Type::I64 => "I64",
            Type::Bool => "Bool",
            Type::String => "String",
            Type::Text => "Text",
        };
        f.write_str(name)
    }
}
