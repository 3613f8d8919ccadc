//! Ordered per-field constraint declarations and their evaluation.

use std::collections::HashSet;

use super::constraint::Constraint;
use super::error::SchemaError;
use super::{ErrorMap, FormValues};

/// Constraints declared for one field, in evaluation order.
#[derive(Debug, Clone)]
pub struct FieldRules {
    name: String,
    constraints: Vec<Constraint>,
}

impl FieldRules {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Values accepted by a `OneOf` rule on this field, if it has one.
    pub fn allowed_values(&self) -> Option<&[String]> {
        self.constraints.iter().find_map(|c| match c {
            Constraint::OneOf { allowed, .. } => Some(allowed.as_slice()),
            _ => None,
        })
    }

    /// First failing constraint's message, short-circuiting.
    fn evaluate(&self, values: &FormValues) -> Option<String> {
        let value = values.get(&self.name).map(String::as_str).unwrap_or("");
        self.constraints.iter().find_map(|constraint| {
            let message = constraint.check(value, values).into_message()?;
            tracing::trace!(
                field = %self.name,
                constraint = constraint.name(),
                "Constraint failed"
            );
            Some(message)
        })
    }
}

/// Immutable validation schema for one form.
///
/// Evaluation is a pure function of the supplied values: the schema keeps
/// no memory of earlier runs.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Declared fields in order.
    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldRules> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Every declared field mapped to the empty string.
    pub fn empty_values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), String::new()))
            .collect()
    }

    /// Error for one field, or `None` when it is valid or undeclared.
    pub fn validate_field(&self, field: &str, values: &FormValues) -> Option<String> {
        self.field(field).and_then(|rules| rules.evaluate(values))
    }

    /// Errors for every failing field. An empty map means the form is valid.
    pub fn validate_all(&self, values: &FormValues) -> ErrorMap {
        self.fields
            .iter()
            .filter_map(|rules| {
                rules
                    .evaluate(values)
                    .map(|message| (rules.name.clone(), message))
            })
            .collect()
    }
}

/// Builder for [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldRules>,
}

impl SchemaBuilder {
    /// Declare a field with its constraints in evaluation order.
    pub fn field<I>(mut self, name: impl Into<String>, constraints: I) -> Self
    where
        I: IntoIterator<Item = Constraint>,
    {
        self.fields.push(FieldRules {
            name: name.into(),
            constraints: constraints.into_iter().collect(),
        });
        self
    }

    /// Finish the schema.
    ///
    /// # Errors
    /// - [`SchemaError::DuplicateField`] if a field is declared twice
    /// - [`SchemaError::UnknownReference`] if an `EqualsField` rule names a
    ///   field that is not declared
    pub fn build(self) -> Result<Schema, SchemaError> {
        self.check()?;
        Ok(Schema {
            fields: self.fields,
        })
    }

    fn check(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for rules in &self.fields {
            if !seen.insert(rules.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    field: rules.name.clone(),
                });
            }
        }

        for rules in &self.fields {
            for constraint in &rules.constraints {
                if let Constraint::EqualsField { other, .. } = constraint {
                    if !seen.contains(other.as_str()) {
                        return Err(SchemaError::UnknownReference {
                            field: rules.name.clone(),
                            other: other.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
