use super::{Formatter, Params, ToSql};

use lookup_core::stmt::Value;

/// A value bound as a statement parameter
pub(super) struct Param<'a>(pub(super) &'a Value);

/// A value written inline; DDL statements cannot take parameters
pub(super) struct Literal<'a>(pub(super) &'a Value);

impl ToSql for Param<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self.0);
        fmt!(f, placeholder);
    }
}

impl ToSql for Literal<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self.0 {
            Value::Bool(true) => f.dst.push('1'),
            Value::Bool(false) => f.dst.push('0'),
            Value::I64(v) => f.dst.push_str(&v.to_string()),
            Value::Null => f.dst.push_str("NULL"),
            Value::String(v) => {
                f.dst.push('\'');
                f.dst.push_str(&v.replace('\'', "''"));
                f.dst.push('\'');
            }
        }
    }
}
