//! Wizard step machine.
//!
//! The controller owns the current step and the latest submission record.
//! Party, delivery and attachment state belong to their own components and
//! are only read here, through [`WizardInputs`].

use tracing::{debug, info, warn};

use crate::submission::{SubmissionCoordinator, SubmissionError, SubmissionRecord};
use crate::summary::ReviewSummary;
use crate::wizard::error::WizardError;
use crate::wizard::types::{UnmetPrecondition, WizardAction, WizardInputs, WizardStep};
use crate::wizard::validation::check_readiness;

/// Drives the capture/review steps and the submission collaborator.
///
/// `advance` and `confirm_and_submit` borrow the controller mutably for the
/// whole submission, so a second attempt cannot start before the first has
/// resolved.
#[derive(Debug)]
pub struct WizardController<C> {
    step: WizardStep,
    coordinator: C,
    attempts: u32,
    last_submission: Option<SubmissionRecord>,
    last_refusal: Vec<UnmetPrecondition>,
}

impl<C: SubmissionCoordinator> WizardController<C> {
    /// Creates a controller in the capture step.
    #[must_use]
    pub fn new(coordinator: C) -> Self {
        Self {
            step: WizardStep::Capture,
            coordinator,
            attempts: 0,
            last_submission: None,
            last_refusal: Vec::new(),
        }
    }

    /// Current step.
    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Latest submission attempt, if any.
    #[must_use]
    pub fn last_submission(&self) -> Option<&SubmissionRecord> {
        self.last_submission.as_ref()
    }

    /// Preconditions that blocked the latest refused action.
    #[must_use]
    pub fn last_refusal(&self) -> &[UnmetPrecondition] {
        &self.last_refusal
    }

    /// Number of submission attempts started so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The submission collaborator.
    #[must_use]
    pub fn coordinator(&self) -> &C {
        &self.coordinator
    }

    /// Capture → Review.
    ///
    /// Checks every precondition, then submits; the step only changes if the
    /// submission succeeds.
    ///
    /// # Errors
    ///
    /// - `WizardError::InvalidTransition` if not in the capture step
    /// - `WizardError::NotReady` if a precondition is unmet (nothing is submitted)
    /// - `WizardError::SubmissionFailed` if the collaborator fails
    pub async fn advance(&mut self, inputs: &WizardInputs<'_>) -> Result<WizardStep, WizardError> {
        let target = self.target(WizardAction::Advance)?;
        self.ensure_ready(inputs)?;

        let (record, failure) = self.submit(inputs).await;
        if let Some(source) = failure {
            return Err(WizardError::SubmissionFailed {
                attempt: record.attempt,
                source,
            });
        }

        info!(from = %self.step, to = %target, "wizard advanced");
        self.step = target;
        Ok(target)
    }

    /// Review → Capture. Entered data is untouched.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidTransition` if not in the review step.
    pub fn retreat(&mut self) -> Result<WizardStep, WizardError> {
        let target = self.target(WizardAction::Retreat)?;
        info!(from = %self.step, to = %target, "wizard retreated");
        self.step = target;
        Ok(target)
    }

    /// Submits again from the review step.
    ///
    /// The step stays Review whatever the outcome, so the user can retry.
    /// A collaborator failure is reported through the returned record, not
    /// as an error.
    ///
    /// # Errors
    ///
    /// - `WizardError::InvalidTransition` if not in the review step
    /// - `WizardError::NotReady` if the data no longer passes the gate
    pub async fn confirm_and_submit(
        &mut self,
        inputs: &WizardInputs<'_>,
    ) -> Result<SubmissionRecord, WizardError> {
        self.target(WizardAction::Submit)?;
        self.ensure_ready(inputs)?;

        let (record, _) = self.submit(inputs).await;
        Ok(record)
    }

    /// Returns to the capture step and forgets the submission record.
    pub fn reset(&mut self) {
        debug!(step = %self.step, "wizard reset");
        self.step = WizardStep::Capture;
        self.last_submission = None;
        self.last_refusal.clear();
    }

    fn target(&self, action: WizardAction) -> Result<WizardStep, WizardError> {
        self.step.next(action).ok_or_else(|| {
            warn!(step = %self.step, %action, "transition refused");
            WizardError::InvalidTransition {
                from: self.step,
                action,
            }
        })
    }

    fn ensure_ready(&mut self, inputs: &WizardInputs<'_>) -> Result<(), WizardError> {
        let unmet = check_readiness(inputs);
        if unmet.is_empty() {
            self.last_refusal.clear();
            return Ok(());
        }
        warn!(
            step = %self.step,
            unmet = unmet.len(),
            first = %unmet[0],
            "wizard not ready"
        );
        self.last_refusal.clone_from(&unmet);
        Err(WizardError::NotReady(unmet))
    }

    /// Runs one attempt and stores its resolved record. The collaborator's
    /// error, if any, is returned next to the record.
    async fn submit(
        &mut self,
        inputs: &WizardInputs<'_>,
    ) -> (SubmissionRecord, Option<SubmissionError>) {
        if let Some(stale) = self
            .last_submission
            .as_ref()
            .filter(|r| !r.outcome.is_resolved())
        {
            warn!(attempt = stale.attempt, "superseding unresolved submission");
        }

        self.attempts += 1;
        let attempt = self.attempts;
        let record = SubmissionRecord::pending(attempt);
        self.last_submission = Some(record.clone());
        debug!(attempt, "submission started");

        let summary = ReviewSummary::build(inputs);
        let (resolved, failure) = match self.coordinator.submit(&summary).await {
            Ok(receipt) => {
                info!(attempt, message = %receipt.message, "submission succeeded");
                (record.succeed(receipt), None)
            }
            Err(err) => {
                warn!(attempt, error = %err, code = err.error_code(), "submission failed");
                (record.fail(err.reason()), Some(err))
            }
        };
        self.last_submission = Some(resolved.clone());
        (resolved, failure)
    }
}
