use thiserror::Error;

/// Errors raised while building a [`Schema`](super::Schema).
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Field '{field}' is declared more than once")]
    DuplicateField { field: String },

    #[error("Field '{field}' references undeclared field '{other}'")]
    UnknownReference { field: String, other: String },

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
