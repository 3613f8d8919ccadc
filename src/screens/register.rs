//! Registration screen.

use crate::form::SubmitOutcome;
use crate::transport::{ServiceResponse, TransportError};
use crate::validation::{patterns, Constraint, Schema, SchemaError};

use super::login::password_rules;

pub const ENDPOINT: &str = "/register";

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";

pub fn schema() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(
            NAME,
            [
                Constraint::required("Name is required"),
                Constraint::min_length(3, "Name must be at least 3 characters"),
                Constraint::matches(
                    patterns::letters_and_spaces(),
                    "This field must only contain letters",
                ),
            ],
        )
        .field(
            EMAIL,
            [
                Constraint::email("Invalid email"),
                Constraint::matches(patterns::signup_email(), "Invalid email address"),
                Constraint::required("Email is required"),
            ],
        )
        .field(PASSWORD, password_rules())
        .field(
            CONFIRM_PASSWORD,
            [
                Constraint::required("Confirm Password is required"),
                Constraint::equals_field(PASSWORD, "Passwords must match"),
            ],
        )
        .build()
}

/// Any successful reply means the account was created.
pub fn classify(result: Result<ServiceResponse, TransportError>) -> SubmitOutcome {
    match result {
        Ok(_) => SubmitOutcome::Success,
        Err(_) => SubmitOutcome::UnknownFailure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FormValues;

    fn values(name: &str, email: &str, password: &str, confirm: &str) -> FormValues {
        FormValues::from([
            (NAME.to_string(), name.to_string()),
            (EMAIL.to_string(), email.to_string()),
            (PASSWORD.to_string(), password.to_string()),
            (CONFIRM_PASSWORD.to_string(), confirm.to_string()),
        ])
    }

    #[test]
    fn valid_registration_passes() {
        let errors = schema()
            .unwrap()
            .validate_all(&values("Jane Doe", "jane@example.com", "Abc123!", "Abc123!"));
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn name_rules() {
        let s = schema().unwrap();
        let check = |name: &str| s.validate_field(NAME, &values(name, "", "", ""));
        assert_eq!(check("").as_deref(), Some("Name is required"));
        assert_eq!(check("Jo").as_deref(), Some("Name must be at least 3 characters"));
        assert_eq!(check("Jo3y").as_deref(), Some("This field must only contain letters"));
        assert_eq!(check("Joey Ann"), None);
    }

    #[test]
    fn email_shape_checked_before_signup_rule() {
        let s = schema().unwrap();
        let check = |email: &str| s.validate_field(EMAIL, &values("", email, "", ""));
        // The registration rule is strict, so it reports an empty value
        // before `required` is reached.
        assert_eq!(check("").as_deref(), Some("Invalid email address"));
        assert_eq!(check("not-an-email").as_deref(), Some("Invalid email"));
        assert_eq!(check("a@exa_mple.com").as_deref(), Some("Invalid email"));
        // Passes the general shape, fails the stricter registration rule.
        assert_eq!(check("o'neil@example.com").as_deref(), Some("Invalid email address"));
        assert_eq!(check("oneil@example.com"), None);
    }

    #[test]
    fn confirm_password_must_match() {
        let s = schema().unwrap();
        assert_eq!(
            s.validate_field(CONFIRM_PASSWORD, &values("", "", "Abc123!", ""))
                .as_deref(),
            Some("Confirm Password is required")
        );
        assert_eq!(
            s.validate_field(CONFIRM_PASSWORD, &values("", "", "Abc123!", "Abc123?"))
                .as_deref(),
            Some("Passwords must match")
        );
        assert_eq!(
            s.validate_field(CONFIRM_PASSWORD, &values("", "", "Abc123!", "Abc123!")),
            None
        );
    }

    #[test]
    fn classify_maps_transport_errors_to_unknown() {
        let ok = Ok(ServiceResponse {
            status: 201,
            body: serde_json::Value::Null,
        });
        assert_eq!(classify(ok), SubmitOutcome::Success);
        let err = Err(TransportError::Status {
            status: 409,
            message: "exists".into(),
        });
        assert_eq!(classify(err), SubmitOutcome::UnknownFailure);
    }
}
