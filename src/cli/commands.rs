//! Command implementations, kept free of process exit handling.

use std::fmt::Write as _;

use crate::config::Config;
use crate::form::{FormController, FormError, SubmitAttempt, SubmitOutcome};
use crate::screens::{Screen, ScreenError};
use crate::submit::SubmitReport;
use crate::validation::{Constraint, ErrorMap, Schema};

/// Apply `name=value` pairs to a form, touching each field like a blur.
pub fn fill(form: &mut FormController, fields: &[(String, String)]) -> Result<(), FormError> {
    for (name, value) in fields {
        form.set_value(name, value.as_str())?;
        form.set_touched(name)?;
    }
    Ok(())
}

/// One line per field with its rules in evaluation order; dropdown fields
/// also list their options.
pub fn render_fields(screen: Screen) -> Result<String, ScreenError> {
    let schema = screen.schema()?;
    let mut out = String::new();
    for field in schema.fields() {
        let rules: Vec<&str> = field.constraints().iter().map(Constraint::name).collect();
        let _ = write!(out, "{}: {}", field.name(), rules.join(", "));
        if let Some(options) = field.allowed_values() {
            let _ = write!(out, " [{}]", options.join(", "));
        }
        out.push('\n');
    }
    Ok(out)
}

/// `field: message` lines in the schema's field order.
pub fn render_errors(schema: &Schema, errors: &ErrorMap) -> String {
    let mut out = String::new();
    for field in schema.field_names() {
        if let Some(message) = errors.get(field) {
            let _ = writeln!(out, "{}: {}", field, message);
        }
    }
    out
}

pub fn render_report(schema: &Schema, report: &SubmitReport) -> String {
    match report {
        SubmitReport::Blocked { errors } => render_errors(schema, errors),
        SubmitReport::InFlight => "A submission is already in progress\n".to_string(),
        SubmitReport::Completed(outcome) | SubmitReport::Discarded(outcome) => match outcome {
            SubmitOutcome::Success => "Form submitted successfully\n".to_string(),
            SubmitOutcome::FieldError { field, message } => format!("{}: {}\n", field, message),
            SubmitOutcome::UnknownFailure => {
                "Submission failed, please try again\n".to_string()
            }
        },
    }
}

/// Client-side validation only. Returns the blocking errors, if any.
pub fn check(screen: Screen, fields: &[(String, String)]) -> anyhow::Result<ErrorMap> {
    let mut form = screen.controller()?;
    fill(&mut form, fields)?;
    // Same gate as a real submit, without the external call.
    let attempt = form.attempt_submit();
    Ok(match attempt {
        SubmitAttempt::Blocked { errors } => errors,
        _ => ErrorMap::new(),
    })
}

/// Validate then submit over HTTP.
pub async fn submit(
    screen: Screen,
    fields: &[(String, String)],
    config: &Config,
) -> anyhow::Result<SubmitReport> {
    let pipeline = screen.pipeline(config)?;
    {
        let form = pipeline.form();
        let mut form = form.lock();
        fill(&mut form, fields)?;
    }
    Ok(pipeline.submit().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn render_fields_lists_options() {
        let out = render_fields(Screen::UserDetails).unwrap();
        assert!(out.contains("bloodGroup: required, one_of [A+, A-, B+, B-, AB+, AB-, O+, O-]"));
        assert!(out
            .lines()
            .any(|l| l == "fullName: required, min_length, pattern"));
        assert!(out.lines().any(|l| l == "dob: required, date, max_date"));
    }

    #[test]
    fn check_reports_missing_fields() {
        let errors = check(Screen::Login, &pairs(&[("email", "a@b.co")])).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["password"], "Password is required");
    }

    #[test]
    fn check_passes_valid_login() {
        let errors = check(
            Screen::Login,
            &pairs(&[("email", "a@b.co"), ("password", "Abc123!")]),
        )
        .unwrap();
        assert!(errors.is_empty());
    }

    #[test]
    fn check_rejects_unknown_field() {
        let err = check(Screen::Login, &pairs(&[("username", "x")])).unwrap_err();
        assert!(err.to_string().contains("username"));
    }

    #[test]
    fn render_errors_follows_schema_order() {
        let schema = Screen::Register.schema().unwrap();
        let errors = check(Screen::Register, &[]).unwrap();
        assert_eq!(
            render_errors(&schema, &errors),
            "name: Name is required\n\
             email: Invalid email address\n\
             password: Password is required\n\
             confirmPassword: Confirm Password is required\n"
        );
    }

    #[test]
    fn render_report_formats_outcomes() {
        let schema = Screen::Login.schema().unwrap();
        assert_eq!(
            render_report(
                &schema,
                &SubmitReport::Completed(SubmitOutcome::field_error("email", "invalid email"))
            ),
            "email: invalid email\n"
        );
        assert_eq!(
            render_report(&schema, &SubmitReport::Completed(SubmitOutcome::Success)),
            "Form submitted successfully\n"
        );
    }
}
