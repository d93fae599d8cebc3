//! Key normalization.
//!
//! A lookup key travels in two forms. The *accessor* form is how keys look
//! when used as names (`new_york`); the *storage* form is how they are kept
//! in the key column (`new york`). Both are lower-case; they differ only in
//! whether words are joined by underscores or spaces.

/// Lower-cases `raw` and turns spaces into underscores.
pub fn accessor(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "_")
}

/// Lower-cases `raw` and turns underscores into spaces.
pub fn storage(raw: &str) -> String {
    raw.to_lowercase().replace('_', " ")
}

/// Case-insensitive key comparison, ignoring the space/underscore spelling.
pub fn eq(a: &str, b: &str) -> bool {
    storage(a) == storage(b)
}
