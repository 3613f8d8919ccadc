use std::collections::BTreeMap;

use crate::mvi::ModelState;
use crate::validation::{ErrorMap, FormValues, Schema};

/// Interaction and validation state of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    pub value: String,
    /// Value the field returns to on reset.
    pub initial: String,
    /// Set on first blur or first submit attempt.
    pub touched: bool,
    /// Schema error for the current values. Recomputed, never hand-set.
    pub validation_error: Option<String>,
    /// Error reported by the remote service for the last submission.
    pub server_error: Option<String>,
}

impl FieldState {
    fn new(initial: String) -> Self {
        Self {
            value: initial.clone(),
            initial,
            ..Self::default()
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.value != self.initial
    }

    /// Current error regardless of touched state.
    pub fn error(&self) -> Option<&str> {
        self.validation_error
            .as_deref()
            .or(self.server_error.as_deref())
    }

    /// Error to display: hidden until the field has been touched.
    pub fn visible_error(&self) -> Option<&str> {
        if self.touched {
            self.error()
        } else {
            None
        }
    }
}

/// Aggregate state of one form instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub fields: BTreeMap<String, FieldState>,
    pub submitting: bool,
    /// Transient flag set by a successful submission, cleared by a timer.
    pub submit_succeeded: bool,
    pub submit_count: u32,
    /// Incremented on every reset so late timers can tell they are stale.
    pub epoch: u64,
}

impl ModelState for FormState {}

impl FormState {
    /// Fresh, untouched state for `schema` with the given initial values.
    ///
    /// Fields missing from `initial` start empty.
    pub fn new(schema: &Schema, initial: &FormValues) -> Self {
        let fields = schema
            .field_names()
            .map(|name| {
                let value = initial.get(name).cloned().unwrap_or_default();
                (name.to_string(), FieldState::new(value))
            })
            .collect();

        let mut state = Self {
            fields,
            ..Self::default()
        };
        state.revalidate(schema);
        state
    }

    /// Current value of every field.
    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.value.clone()))
            .collect()
    }

    /// Initial value of every field.
    pub fn initial_values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.initial.clone()))
            .collect()
    }

    /// Current errors of every field, visible or not.
    pub fn errors(&self) -> ErrorMap {
        self.fields
            .iter()
            .filter_map(|(name, field)| field.error().map(|e| (name.clone(), e.to_string())))
            .collect()
    }

    /// Errors a view should show right now.
    pub fn visible_errors(&self) -> ErrorMap {
        self.fields
            .iter()
            .filter_map(|(name, field)| {
                field
                    .visible_error()
                    .map(|e| (name.clone(), e.to_string()))
            })
            .collect()
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|f| f.validation_error.is_none())
    }

    pub fn is_dirty(&self) -> bool {
        self.fields.values().any(FieldState::is_dirty)
    }

    /// Recompute every schema error from the current values.
    pub(crate) fn revalidate(&mut self, schema: &Schema) {
        let errors = schema.validate_all(&self.values());
        for (name, field) in self.fields.iter_mut() {
            field.validation_error = errors.get(name).cloned();
        }
    }
}
