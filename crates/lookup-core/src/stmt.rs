mod record;
pub use record::Record;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
