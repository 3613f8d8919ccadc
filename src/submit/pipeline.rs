use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::form::{FormController, SubmitAttempt, SubmitOutcome};
use crate::validation::ErrorMap;

use super::timer::ExpiryTimer;
use super::traits::{Classifier, Submitter};

/// Default lifetime of the success flag.
pub const DEFAULT_SUCCESS_FLASH: Duration = Duration::from_millis(3000);

/// Form controller shared between the pipeline, its timer and the host.
pub type SharedForm = Arc<Mutex<FormController>>;

/// What a call to [`SubmissionPipeline::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    /// Client-side validation failed; no request was made.
    Blocked { errors: ErrorMap },
    /// A submission was already in flight; no request was made.
    InFlight,
    /// The request ran and its classified outcome was applied.
    Completed(SubmitOutcome),
    /// The request ran but the form was reset meanwhile; nothing applied.
    Discarded(SubmitOutcome),
}

/// Validate, call the external submit operation once, apply the result.
pub struct SubmissionPipeline<S: Submitter> {
    form: SharedForm,
    submitter: S,
    classifier: Box<dyn Classifier<S::Response, S::Error>>,
    success_flash: Duration,
    /// Pending success-flag expiry, tagged with the epoch it clears.
    flash_timer: Mutex<Option<(u64, ExpiryTimer)>>,
}

impl<S: Submitter> SubmissionPipeline<S> {
    pub fn new<C>(form: FormController, submitter: S, classifier: C) -> Self
    where
        C: Classifier<S::Response, S::Error> + 'static,
    {
        Self {
            form: Arc::new(Mutex::new(form)),
            submitter,
            classifier: Box::new(classifier),
            success_flash: DEFAULT_SUCCESS_FLASH,
            flash_timer: Mutex::new(None),
        }
    }

    /// How long `submit_succeeded` stays raised after a success.
    pub fn with_success_flash(mut self, delay: Duration) -> Self {
        self.success_flash = delay;
        self
    }

    /// Handle for field updates and state reads.
    ///
    /// Reset through [`SubmissionPipeline::reset`] rather than through this
    /// handle so the pending success-flag expiry is cancelled with it. A
    /// timer outliving a reset made here is harmless (its epoch no longer
    /// matches) and is dropped by the next [`flash_pending`](Self::flash_pending).
    pub fn form(&self) -> SharedForm {
        Arc::clone(&self.form)
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// Run one user-initiated submission.
    ///
    /// The form lock is never held across the external call.
    pub async fn submit(&self) -> SubmitReport {
        let attempt = self.form.lock().attempt_submit();
        let (values, attempt_epoch) = match attempt {
            SubmitAttempt::Blocked { errors } => {
                tracing::info!(error_count = errors.len(), "Submission blocked by validation");
                return SubmitReport::Blocked { errors };
            }
            SubmitAttempt::InFlight => return SubmitReport::InFlight,
            SubmitAttempt::Proceeds { values, epoch } => (values, epoch),
        };

        tracing::debug!(field_count = values.len(), epoch = attempt_epoch, "Submitting form");
        let result = self.submitter.submit(&values).await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Submission failed");
        }
        let outcome = self.classifier.classify(result);

        let (applied, epoch) = {
            let mut form = self.form.lock();
            let applied = form.complete_submit(attempt_epoch, outcome.clone());
            (applied, form.epoch())
        };

        if !applied {
            tracing::debug!(?outcome, "Form was reset during submission");
            return SubmitReport::Discarded(outcome);
        }

        match &outcome {
            SubmitOutcome::Success => {
                tracing::info!("Submission succeeded");
                self.schedule_flash_clear(epoch);
            }
            SubmitOutcome::FieldError { field, message } => {
                tracing::info!(field = %field, message = %message, "Submission rejected");
            }
            SubmitOutcome::UnknownFailure => {
                tracing::warn!("Submission failed without a field-level reason");
            }
        }

        SubmitReport::Completed(outcome)
    }

    /// Cancel any pending success-flag expiry and reset the form.
    pub fn reset(&self) {
        self.cancel_flash();
        self.form.lock().reset();
    }

    /// Whether a success-flag expiry is still pending.
    ///
    /// A timer left over from before a reset of the form is cancelled here.
    pub fn flash_pending(&self) -> bool {
        let current_epoch = self.form.lock().epoch();
        let mut slot = self.flash_timer.lock();
        if slot.as_ref().is_some_and(|(epoch, _)| *epoch != current_epoch) {
            if let Some((_, stale)) = slot.take() {
                stale.cancel();
            }
        }
        slot.as_ref().is_some_and(|(_, timer)| !timer.is_finished())
    }

    fn schedule_flash_clear(&self, epoch: u64) {
        let form = Arc::clone(&self.form);
        let timer = ExpiryTimer::schedule(self.success_flash, move || {
            form.lock().clear_submit_succeeded(epoch);
        });
        if let Some((_, previous)) = self.flash_timer.lock().replace((epoch, timer)) {
            previous.cancel();
        }
    }

    fn cancel_flash(&self) {
        if let Some((_, timer)) = self.flash_timer.lock().take() {
            timer.cancel();
        }
    }
}
