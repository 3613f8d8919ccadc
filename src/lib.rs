//! Schema-driven form validation and submission.
//!
//! - [`validation`] declares per-field constraints and evaluates them
//! - [`form`] tracks values, touched/dirty state and errors for one form
//! - [`submit`] gates submission on validation and drives the external call
//! - [`screens`] defines the login, registration and user-details forms
//! - [`transport`] submits over HTTP; [`config`] configures it
//! - [`cli`] backs the `formflow` binary

pub mod cli;
pub mod config;
pub mod form;
pub mod logging;
pub mod mvi;
pub mod screens;
pub mod submit;
pub mod transport;
pub mod validation;

pub use form::{FormController, FormError, SubmitAttempt, SubmitOutcome};
pub use screens::Screen;
pub use submit::{SubmissionPipeline, SubmitReport, Submitter};
pub use validation::{Constraint, ErrorMap, FormValues, Schema};
