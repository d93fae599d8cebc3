use super::Error;

/// Error when a caller asks a lookup table or referrer for an accessor it
/// does not have.
///
/// This is distinct from "record not found": the key may well exist, but the
/// requested attribute or relationship name is not one the table knows.
#[derive(Debug)]
pub(super) struct UnsupportedAccessor {
    table: Box<str>,
    accessor: Box<str>,
}

impl std::error::Error for UnsupportedAccessor {}

impl core::fmt::Display for UnsupportedAccessor {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported accessor: `{}` is not a lookup attribute of `{}`",
            self.accessor, self.table
        )
    }
}

impl Error {
    /// Creates an unsupported accessor error for `accessor` on `table`.
    pub fn unsupported_accessor(table: impl Into<String>, accessor: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedAccessor(UnsupportedAccessor {
            table: table.into().into(),
            accessor: accessor.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported accessor error.
    pub fn is_unsupported_accessor(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnsupportedAccessor(_)))
    }
}
