//! Schema-driven field validation.
//!
//! - [`Constraint`] - named, pure validation primitives
//! - [`patterns`] - compiled regexes for the common pattern rules
//! - [`Schema`] - ordered per-field constraints with `validate_field` /
//!   `validate_all`

mod constraint;
mod error;
pub mod patterns;
mod schema;

use std::collections::BTreeMap;

pub use constraint::{parse_date, Constraint, DateBound, Verdict, DATE_FORMAT};
pub use error::SchemaError;
pub use schema::{FieldRules, Schema, SchemaBuilder};

/// Field name to raw value.
pub type FormValues = BTreeMap<String, String>;

/// Field name to error message. Absent fields are valid.
pub type ErrorMap = BTreeMap<String, String>;

/// Error for one field. See [`Schema::validate_field`].
pub fn validate_field(schema: &Schema, field: &str, values: &FormValues) -> Option<String> {
    schema.validate_field(field, values)
}

/// Errors for every failing field. See [`Schema::validate_all`].
pub fn validate_all(schema: &Schema, values: &FormValues) -> ErrorMap {
    schema.validate_all(values)
}
