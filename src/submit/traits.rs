//! Seams between the pipeline and the host application.

use async_trait::async_trait;

use crate::form::SubmitOutcome;
use crate::validation::FormValues;

/// The external submit operation supplied by the host.
///
/// Called at most once per accepted submit attempt with the validated
/// values. Transport concerns (HTTP, IPC, retries) live behind this trait;
/// the pipeline never retries.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Successful response handed to the classifier.
    type Response: Send;

    /// Transport failure handed to the classifier.
    type Error: std::fmt::Display + Send;

    /// Send `values` to the remote service.
    async fn submit(&self, values: &FormValues) -> Result<Self::Response, Self::Error>;
}

/// Maps a submit result to a form outcome.
///
/// Closures of the right shape implement this trait.
pub trait Classifier<R, E>: Send + Sync {
    fn classify(&self, result: Result<R, E>) -> SubmitOutcome;
}

impl<R, E, F> Classifier<R, E> for F
where
    F: Fn(Result<R, E>) -> SubmitOutcome + Send + Sync,
{
    fn classify(&self, result: Result<R, E>) -> SubmitOutcome {
        self(result)
    }
}
