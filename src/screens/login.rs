//! Login screen: email and password, with service-reported credential errors.

use crate::form::SubmitOutcome;
use crate::transport::{ServiceResponse, TransportError};
use crate::validation::{patterns, Constraint, Schema, SchemaError};

pub const ENDPOINT: &str = "/login";

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";

/// Password rules shared with registration.
pub(crate) fn password_rules() -> Vec<Constraint> {
    vec![
        Constraint::required("Password is required"),
        Constraint::min_length(6, "Password is too short - should be 6 chars minimum."),
        Constraint::matches(
            patterns::latin_letter(),
            "Password can only contain Latin letters.",
        ),
        Constraint::matches(
            patterns::uppercase(),
            "Password must contain at least one uppercase letter.",
        ),
        Constraint::matches(
            patterns::lowercase(),
            "Password must contain at least one lowercase letter.",
        ),
        Constraint::matches(patterns::digit(), "Password must contain at least one number."),
        Constraint::matches(
            patterns::special_char(),
            "Password must contain at least one special character.",
        ),
    ]
}

pub fn schema() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(
            EMAIL,
            [
                Constraint::email("Invalid email"),
                Constraint::required("Email is required"),
            ],
        )
        .field(PASSWORD, password_rules())
        .build()
}

/// `{"err": "invalid email" | "invalid password"}` rejects the credential;
/// any other reply logs the user in.
pub fn classify(result: Result<ServiceResponse, TransportError>) -> SubmitOutcome {
    match result {
        Ok(response) => match response.str_field("err") {
            Some("invalid email") => SubmitOutcome::field_error(EMAIL, "invalid email"),
            Some("invalid password") => SubmitOutcome::field_error(PASSWORD, "invalid password"),
            _ => SubmitOutcome::Success,
        },
        Err(_) => SubmitOutcome::UnknownFailure,
    }
}
