use super::Error;

/// Error when a value fails validation constraints.
#[derive(Debug)]
pub(super) struct ValidationError {
    pub(super) kind: ValidationErrorKind,
}

#[derive(Debug)]
pub(super) enum ValidationErrorKind {
    /// A required column is missing or blank
    Presence { column: Box<str> },

    /// String length constraint violation
    Length {
        column: Box<str>,
        value_len: usize,
        min: Option<usize>,
        max: Option<usize>,
    },

    /// The value does not have the column's type
    Type {
        column: Box<str>,
        expected: Box<str>,
        actual: Box<str>,
    },

    /// A unique index rejected the value
    Uniqueness { table: Box<str>, column: Box<str> },
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("validation failed: ")?;

        match &self.kind {
            ValidationErrorKind::Presence { column } => {
                write!(f, "`{column}` can't be blank")
            }
            ValidationErrorKind::Length {
                column,
                value_len,
                min,
                max,
            } => match (min, max) {
                (Some(min), Some(max)) if min == max => write!(
                    f,
                    "`{column}` length {value_len} does not match required length {min}"
                ),
                (Some(min), _) if value_len < min => write!(
                    f,
                    "`{column}` length {value_len} is too short (minimum: {min})"
                ),
                (_, Some(max)) if value_len > max => write!(
                    f,
                    "`{column}` length {value_len} is too long (maximum: {max})"
                ),
                _ => write!(f, "`{column}` length constraint violation"),
            },
            ValidationErrorKind::Type {
                column,
                expected,
                actual,
            } => write!(f, "`{column}` expected {expected}, got {actual}"),
            ValidationErrorKind::Uniqueness { table, column } => {
                write!(f, "`{table}.{column}` has already been taken")
            }
        }
    }
}

impl Error {
    /// Creates a presence validation error for a blank required column.
    pub fn validation_presence(column: impl Into<String>) -> Error {
        Error::validation(ValidationErrorKind::Presence {
            column: column.into().into(),
        })
    }

    /// Creates a length validation error.
    pub fn validation_length(
        column: impl Into<String>,
        value_len: usize,
        min: Option<usize>,
        max: Option<usize>,
    ) -> Error {
        Error::validation(ValidationErrorKind::Length {
            column: column.into().into(),
            value_len,
            min,
            max,
        })
    }

    /// Creates a type mismatch validation error.
    pub fn validation_type(
        column: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Error {
        Error::validation(ValidationErrorKind::Type {
            column: column.into().into(),
            expected: expected.into().into(),
            actual: actual.into().into(),
        })
    }

    /// Creates a uniqueness validation error. Drivers return this when a
    /// unique index rejects an insert or update.
    pub fn validation_uniqueness(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::validation(ValidationErrorKind::Uniqueness {
            table: table.into().into(),
            column: column.into().into(),
        })
    }

    fn validation(kind: ValidationErrorKind) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError { kind }))
    }

    /// Returns `true` if this error is any validation error.
    pub fn is_validation(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Validation(_)))
    }

    /// Returns `true` if a unique index rejected the value.
    pub fn is_uniqueness_violation(&self) -> bool {
        self.any_kind(|kind| {
            matches!(
                kind,
                super::ErrorKind::Validation(ValidationError {
                    kind: ValidationErrorKind::Uniqueness { .. }
                })
            )
        })
    }
}
