//! The three forms backed by the remote service.
//!
//! Each screen contributes a schema, an endpoint and a classifier for the
//! service's replies; the engine in [`crate::form`] and [`crate::submit`]
//! is shared.

pub mod login;
pub mod register;
pub mod user_details;

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::config::Config;
use crate::form::{FormController, SubmitOutcome};
use crate::submit::SubmissionPipeline;
use crate::transport::{HttpSubmitter, ServiceResponse, TransportError};
use crate::validation::{Schema, SchemaError};

/// Errors raised while assembling a screen.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("Invalid schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("Transport setup failed: {0}")]
    Transport(#[from] TransportError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Screen {
    Login,
    Register,
    UserDetails,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Login, Screen::Register, Screen::UserDetails];

    pub fn name(self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Register => "register",
            Screen::UserDetails => "user-details",
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Screen::Login => login::ENDPOINT,
            Screen::Register => register::ENDPOINT,
            Screen::UserDetails => user_details::ENDPOINT,
        }
    }

    pub fn schema(self) -> Result<Schema, SchemaError> {
        match self {
            Screen::Login => login::schema(),
            Screen::Register => register::schema(),
            Screen::UserDetails => user_details::schema(),
        }
    }

    pub fn classify(self, result: Result<ServiceResponse, TransportError>) -> SubmitOutcome {
        match self {
            Screen::Login => login::classify(result),
            Screen::Register => register::classify(result),
            Screen::UserDetails => user_details::classify(result),
        }
    }

    /// Fresh, empty form for this screen.
    pub fn controller(self) -> Result<FormController, ScreenError> {
        Ok(FormController::new(Arc::new(self.schema()?)))
    }

    /// Form plus HTTP submission wired from `config`.
    pub fn pipeline(self, config: &Config) -> Result<SubmissionPipeline<HttpSubmitter>, ScreenError> {
        let submitter = HttpSubmitter::new(&config.service, self.endpoint())?;
        let classifier =
            move |result: Result<ServiceResponse, TransportError>| self.classify(result);
        let pipeline = SubmissionPipeline::new(self.controller()?, submitter, classifier)
            .with_success_flash(config.submission.success_flash());
        Ok(pipeline)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
