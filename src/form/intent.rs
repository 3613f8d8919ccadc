use crate::mvi::Intent;

use super::outcome::SubmitOutcome;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// User edited a field.
    SetValue { field: String, value: String },
    /// User left a field.
    SetTouched { field: String },
    /// User pressed submit. No-op while a submission is in flight.
    SubmitRequested,
    /// The external submit operation started in `epoch` finished. Ignored
    /// unless that submission is still the one in flight.
    SubmitCompleted { epoch: u64, outcome: SubmitOutcome },
    /// Success-flag expiry. Ignored if the form was reset since `epoch`.
    ClearSubmitSucceeded { epoch: u64 },
    Reset,
}

impl Intent for FormIntent {}
