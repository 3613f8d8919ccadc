//! Constraint primitives.
//!
//! A constraint is a pure check of one candidate value against the full
//! value set of the form. Constraints never mutate anything and hold no
//! state between calls.

use chrono::{Local, NaiveDate};
use regex::Regex;

use super::error::SchemaError;
use super::{patterns, FormValues};

/// Calendar format accepted by date constraints (`<input type="date">`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Outcome of evaluating one constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(String),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The failure message, if any.
    pub fn into_message(self) -> Option<String> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(message) => Some(message),
        }
    }
}

/// Upper bound for date constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    /// The local calendar date at evaluation time.
    Today,
    /// A fixed calendar date.
    Fixed(NaiveDate),
}

impl DateBound {
    pub fn resolve(&self) -> NaiveDate {
        match self {
            DateBound::Today => Local::now().date_naive(),
            DateBound::Fixed(date) => *date,
        }
    }
}

/// A single named validation rule with its failure message.
///
/// `MinLength`, `Date`, `MaxDate` and email-shape patterns pass on an empty
/// value so that emptiness is judged by `Required`. Plain patterns,
/// `EqualsField` and `OneOf` are strict and fail on empty input.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Value must be non-empty.
    Required { message: String },
    /// Value must contain at least `min` characters.
    MinLength { min: usize, message: String },
    /// Value must match `regex` somewhere (anchor the regex for full matches).
    /// With `skip_empty`, an empty value passes.
    Pattern {
        regex: Regex,
        message: String,
        skip_empty: bool,
    },
    /// Value must parse as a `YYYY-MM-DD` calendar date.
    Date { message: String },
    /// Date value must not be after `bound`.
    MaxDate { bound: DateBound, message: String },
    /// Value must equal the value of another field. Empty is not exempt.
    EqualsField { other: String, message: String },
    /// Value must be one of `allowed`. The empty placeholder is not exempt.
    OneOf { allowed: Vec<String>, message: String },
}

impl Constraint {
    pub fn required(message: impl Into<String>) -> Self {
        Constraint::Required {
            message: message.into(),
        }
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Constraint::MinLength {
            min,
            message: message.into(),
        }
    }

    /// Compile `pattern` into a pattern constraint.
    ///
    /// # Errors
    /// Returns [`SchemaError::InvalidPattern`] if the regex does not compile.
    pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Self, SchemaError> {
        let regex = Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::matches(regex, message))
    }

    /// Pattern constraint from an already compiled regex. An empty value
    /// fails unless it matches.
    pub fn matches(regex: Regex, message: impl Into<String>) -> Self {
        Constraint::Pattern {
            regex,
            message: message.into(),
            skip_empty: false,
        }
    }

    /// Email-shape rule. An empty value passes; pair with `required`.
    pub fn email(message: impl Into<String>) -> Self {
        Constraint::Pattern {
            regex: patterns::email(),
            message: message.into(),
            skip_empty: true,
        }
    }

    pub fn date(message: impl Into<String>) -> Self {
        Constraint::Date {
            message: message.into(),
        }
    }

    pub fn max_date(bound: DateBound, message: impl Into<String>) -> Self {
        Constraint::MaxDate {
            bound,
            message: message.into(),
        }
    }

    pub fn equals_field(other: impl Into<String>, message: impl Into<String>) -> Self {
        Constraint::EqualsField {
            other: other.into(),
            message: message.into(),
        }
    }

    pub fn one_of<I, S>(allowed: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Constraint::OneOf {
            allowed: allowed.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Constraint::Required { .. } => "required",
            Constraint::MinLength { .. } => "min_length",
            Constraint::Pattern { .. } => "pattern",
            Constraint::Date { .. } => "date",
            Constraint::MaxDate { .. } => "max_date",
            Constraint::EqualsField { .. } => "equals_field",
            Constraint::OneOf { .. } => "one_of",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Constraint::Required { message }
            | Constraint::MinLength { message, .. }
            | Constraint::Pattern { message, .. }
            | Constraint::Date { message }
            | Constraint::MaxDate { message, .. }
            | Constraint::EqualsField { message, .. }
            | Constraint::OneOf { message, .. } => message,
        }
    }

    /// Evaluate this constraint for `value` given the whole form.
    pub fn check(&self, value: &str, values: &FormValues) -> Verdict {
        let passed = match self {
            Constraint::Required { .. } => !value.is_empty(),
            Constraint::MinLength { min, .. } => {
                value.is_empty() || value.chars().count() >= *min
            }
            Constraint::Pattern {
                regex, skip_empty, ..
            } => (*skip_empty && value.is_empty()) || regex.is_match(value),
            Constraint::Date { .. } => value.is_empty() || parse_date(value).is_some(),
            Constraint::MaxDate { bound, .. } => match parse_date(value) {
                Some(date) => date <= bound.resolve(),
                // Unparseable dates are reported by `Date`.
                None => true,
            },
            Constraint::EqualsField { other, .. } => {
                let other_value = values.get(other).map(String::as_str).unwrap_or("");
                value == other_value
            }
            Constraint::OneOf { allowed, .. } => allowed.iter().any(|a| a == value),
        };

        if passed {
            Verdict::Valid
        } else {
            Verdict::Invalid(self.message().to_string())
        }
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}
