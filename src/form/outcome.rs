use crate::validation::{ErrorMap, FormValues};

/// Result of asking the form to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation failed; every field is now touched so errors are visible.
    Blocked { errors: ErrorMap },
    /// Validation passed; the form is now submitting these values.
    ///
    /// `epoch` identifies this attempt and must be handed back to
    /// [`FormController::complete_submit`](super::FormController::complete_submit).
    Proceeds { values: FormValues, epoch: u64 },
    /// A submission is already in flight; nothing changed.
    InFlight,
}

/// Classified result of the external submit operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values are reset and the success flag raised.
    Success,
    /// The service rejected one field; values are kept.
    FieldError { field: String, message: String },
    /// Failure not attributable to a field; values are kept.
    UnknownFailure,
}

impl SubmitOutcome {
    pub fn field_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        SubmitOutcome::FieldError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success)
    }
}
