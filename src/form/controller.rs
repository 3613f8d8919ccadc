use std::sync::Arc;

use crate::mvi::Reducer;
use crate::validation::{FormValues, Schema};

use super::error::FormError;
use super::intent::FormIntent;
use super::outcome::{SubmitAttempt, SubmitOutcome};
use super::reducer::FormReducer;
use super::state::{FieldState, FormState};

/// Owner of one form's mutable state.
///
/// Every operation dispatches a [`FormIntent`] through [`FormReducer`];
/// the controller itself only validates field names and reports outcomes.
#[derive(Debug, Clone)]
pub struct FormController {
    reducer: FormReducer,
    state: FormState,
}

impl FormController {
    /// Untouched form with every field empty.
    pub fn new(schema: Arc<Schema>) -> Self {
        let state = FormState::new(&schema, &FormValues::new());
        Self {
            reducer: FormReducer::new(schema),
            state,
        }
    }

    /// Untouched form starting from `initial`; reset returns to these values.
    ///
    /// # Errors
    /// Returns [`FormError::UnknownField`] if `initial` names a field the
    /// schema does not declare.
    pub fn with_initial_values(schema: Arc<Schema>, initial: FormValues) -> Result<Self, FormError> {
        if let Some(field) = initial.keys().find(|name| !schema.contains(name)) {
            return Err(FormError::UnknownField {
                field: field.clone(),
            });
        }
        let state = FormState::new(&schema, &initial);
        Ok(Self {
            reducer: FormReducer::new(schema),
            state,
        })
    }

    pub fn schema(&self) -> &Arc<Schema> {
        self.reducer.schema()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.state.field(name)
    }

    pub fn values(&self) -> FormValues {
        self.state.values()
    }

    /// Error to display for `field`: `None` until the field is touched.
    pub fn visible_error(&self, field: &str) -> Option<&str> {
        self.state.field(field).and_then(FieldState::visible_error)
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.submitting
    }

    pub fn submit_succeeded(&self) -> bool {
        self.state.submit_succeeded
    }

    pub fn submit_count(&self) -> u32 {
        self.state.submit_count
    }

    pub fn epoch(&self) -> u64 {
        self.state.epoch
    }

    /// Update a field's value. Errors surface only once the field is touched.
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.ensure_field(field)?;
        self.dispatch(FormIntent::SetValue {
            field: field.to_string(),
            value: value.into(),
        });
        Ok(())
    }

    /// Mark a field touched (blur), revealing its error.
    pub fn set_touched(&mut self, field: &str) -> Result<(), FormError> {
        self.ensure_field(field)?;
        self.dispatch(FormIntent::SetTouched {
            field: field.to_string(),
        });
        Ok(())
    }

    /// Validate everything and, if valid, enter the submitting state.
    pub fn attempt_submit(&mut self) -> SubmitAttempt {
        if self.state.submitting {
            tracing::debug!("Submit ignored: submission already in flight");
            return SubmitAttempt::InFlight;
        }

        self.dispatch(FormIntent::SubmitRequested);

        if self.state.submitting {
            tracing::debug!(attempt = self.state.submit_count, "Submit proceeding");
            SubmitAttempt::Proceeds {
                values: self.state.values(),
                epoch: self.state.epoch,
            }
        } else {
            let errors = self.state.errors();
            tracing::debug!(
                attempt = self.state.submit_count,
                error_count = errors.len(),
                "Submit blocked by validation"
            );
            SubmitAttempt::Blocked { errors }
        }
    }

    /// Apply the classified result of the submission started in `epoch`.
    ///
    /// Returns `false` (and changes nothing) if that submission is no longer
    /// in flight: the form was reset while the request ran, possibly with a
    /// newer submission started since.
    pub fn complete_submit(&mut self, epoch: u64, outcome: SubmitOutcome) -> bool {
        if !self.state.submitting || self.state.epoch != epoch {
            tracing::debug!(
                ?outcome,
                attempt_epoch = epoch,
                current_epoch = self.state.epoch,
                "Ignoring stale completion"
            );
            return false;
        }
        if let SubmitOutcome::FieldError { field, .. } = &outcome {
            if !self.schema().contains(field) {
                tracing::warn!(field = %field, "Service reported an error for an undeclared field");
            }
        }
        self.dispatch(FormIntent::SubmitCompleted { epoch, outcome });
        true
    }

    /// Clear the success flag raised during `epoch`.
    pub fn clear_submit_succeeded(&mut self, epoch: u64) {
        self.dispatch(FormIntent::ClearSubmitSucceeded { epoch });
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        self.dispatch(FormIntent::Reset);
    }

    fn ensure_field(&self, field: &str) -> Result<(), FormError> {
        if self.state.fields.contains_key(field) {
            Ok(())
        } else {
            Err(FormError::UnknownField {
                field: field.to_string(),
            })
        }
    }

    fn dispatch(&mut self, intent: FormIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = self.reducer.reduce(state, intent);
    }
}
