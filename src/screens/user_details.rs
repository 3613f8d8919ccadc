//! User-details (profile) screen.

use crate::form::SubmitOutcome;
use crate::transport::{ServiceResponse, TransportError};
use crate::validation::{patterns, Constraint, DateBound, Schema, SchemaError};

pub const ENDPOINT: &str = "/userdetails";

pub const FULL_NAME: &str = "fullName";
pub const SON_OR_HUSBAND_NAME: &str = "sonOrHusbandName";
pub const GENDER: &str = "gender";
pub const EMAIL: &str = "email";
pub const MOBILE_NUMBER: &str = "mobileNumber";
pub const DOB: &str = "dob";
pub const MARITAL_STATUS: &str = "maritalStatus";
pub const AADHAR_NUMBER: &str = "aadharNumber";
pub const BLOOD_GROUP: &str = "bloodGroup";

pub const GENDERS: [&str; 3] = ["Female", "Male", "Others"];
pub const MARITAL_STATUSES: [&str; 4] = ["Divorced", "Married", "Single", "widowed"];
pub const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

/// Reply body `msg` that confirms the details were stored.
pub const SUBMITTED_MSG: &str = "user form submitted";

/// Schema with the date of birth bounded by today's date.
pub fn schema() -> Result<Schema, SchemaError> {
    schema_with_dob_bound(DateBound::Today)
}

pub fn schema_with_dob_bound(dob_bound: DateBound) -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(
            FULL_NAME,
            [
                Constraint::required("Full Name is required"),
                Constraint::min_length(3, "Full Name must be at least 3 characters"),
                Constraint::matches(
                    patterns::letters_and_spaces(),
                    "Full Name must only contain letters",
                ),
            ],
        )
        .field(
            SON_OR_HUSBAND_NAME,
            [
                Constraint::required("Son/Husband Name is required"),
                Constraint::min_length(3, "Name must be at least 3 characters"),
                Constraint::matches(
                    patterns::letters_and_spaces(),
                    "Name must only contain letters",
                ),
            ],
        )
        .field(
            GENDER,
            [
                Constraint::required("Gender is required"),
                Constraint::one_of(GENDERS, "Gender is required"),
            ],
        )
        .field(
            EMAIL,
            [
                Constraint::required("Email is required"),
                Constraint::email("Invalid email address"),
            ],
        )
        .field(
            MOBILE_NUMBER,
            [
                Constraint::required("Mobile is required"),
                Constraint::matches(
                    patterns::ten_digits(),
                    "Mobile number must contain 10 digits",
                ),
            ],
        )
        .field(
            DOB,
            [
                Constraint::required("Date of Birth is required"),
                Constraint::date("Date of Birth must be a valid date"),
                Constraint::max_date(dob_bound, "Date of Birth cannot be in the future"),
            ],
        )
        .field(
            MARITAL_STATUS,
            [
                Constraint::required("Marital Status is required"),
                Constraint::one_of(MARITAL_STATUSES, "Marital Status is required"),
            ],
        )
        .field(
            AADHAR_NUMBER,
            [
                Constraint::required("Aadhar Number is required"),
                Constraint::matches(patterns::twelve_digits(), "Invalid Aadhar number format"),
            ],
        )
        .field(
            BLOOD_GROUP,
            [
                Constraint::required("Blood Group is required"),
                Constraint::one_of(BLOOD_GROUPS, "Blood Group is required"),
            ],
        )
        .build()
}

/// Only an explicit confirmation counts as success.
pub fn classify(result: Result<ServiceResponse, TransportError>) -> SubmitOutcome {
    match result {
        Ok(response) if response.str_field("msg") == Some(SUBMITTED_MSG) => SubmitOutcome::Success,
        Ok(response) => {
            tracing::warn!(status = response.status, body = %response.body, "Unrecognised reply");
            SubmitOutcome::UnknownFailure
        }
        Err(_) => SubmitOutcome::UnknownFailure,
    }
}
