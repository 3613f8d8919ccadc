//! Submission orchestration.
//!
//! [`SubmissionPipeline`] gates a submit on client-side validation, calls
//! the host's [`Submitter`] exactly once, classifies the result with a
//! [`Classifier`] and applies it to the form. A success raises a transient
//! flag that an [`ExpiryTimer`] clears after a fixed delay.

mod pipeline;
mod timer;
mod traits;

pub use pipeline::{SharedForm, SubmissionPipeline, SubmitReport, DEFAULT_SUCCESS_FLASH};
pub use timer::ExpiryTimer;
pub use traits::{Classifier, Submitter};
