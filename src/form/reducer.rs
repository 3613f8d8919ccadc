use std::sync::Arc;

use crate::mvi::Reducer;
use crate::validation::Schema;

use super::intent::FormIntent;
use super::outcome::SubmitOutcome;
use super::state::FormState;

/// Pure state transitions for a form bound to one schema.
#[derive(Debug, Clone)]
pub struct FormReducer {
    schema: Arc<Schema>,
}

impl FormReducer {
    pub fn new(schema: Arc<Schema>) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    fn reset(&self, state: &FormState) -> FormState {
        let mut fresh = FormState::new(&self.schema, &state.initial_values());
        fresh.epoch = state.epoch.wrapping_add(1);
        fresh
    }
}

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(&self, mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::SetValue { field, value } => {
                let Some(target) = state.fields.get_mut(&field) else {
                    return state;
                };
                target.value = value;
                target.server_error = None;
                // Other fields may depend on this one (confirmation rules).
                state.revalidate(&self.schema);
                state
            }

            FormIntent::SetTouched { field } => {
                let Some(target) = state.fields.get_mut(&field) else {
                    return state;
                };
                target.touched = true;
                state.revalidate(&self.schema);
                state
            }

            FormIntent::SubmitRequested => {
                if state.submitting {
                    return state;
                }
                state.submit_count = state.submit_count.saturating_add(1);
                for field in state.fields.values_mut() {
                    field.touched = true;
                    field.server_error = None;
                }
                state.revalidate(&self.schema);
                state.submitting = state.is_valid();
                state
            }

            FormIntent::SubmitCompleted { epoch, outcome } => {
                // A reset since the request started makes its reply stale,
                // even if a newer submission is now in flight.
                if !state.submitting || state.epoch != epoch {
                    return state;
                }
                match outcome {
                    SubmitOutcome::Success => {
                        let mut fresh = self.reset(&state);
                        fresh.submit_succeeded = true;
                        fresh
                    }
                    SubmitOutcome::FieldError { field, message } => {
                        state.submitting = false;
                        if let Some(target) = state.fields.get_mut(&field) {
                            target.touched = true;
                            target.server_error = Some(message);
                        }
                        state
                    }
                    SubmitOutcome::UnknownFailure => {
                        state.submitting = false;
                        state
                    }
                }
            }

            FormIntent::ClearSubmitSucceeded { epoch } => {
                if state.epoch == epoch {
                    state.submit_succeeded = false;
                }
                state
            }

            FormIntent::Reset => self.reset(&state),
        }
    }
}
