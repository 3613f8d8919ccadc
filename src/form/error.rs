use thiserror::Error;

/// Errors returned by [`FormController`](super::FormController) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Unknown field '{field}'")]
    UnknownField { field: String },
}
