//! Wizard error types.
//!
//! Every variant is recoverable: the wizard stays in the step it was in and
//! the user can fix the input or retry.

use docflow_shared::AppError;
use thiserror::Error;

use crate::submission::SubmissionError;
use crate::wizard::types::{UnmetPrecondition, WizardAction, WizardStep};

/// Errors returned by wizard actions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WizardError {
    /// The action is not allowed from the current step.
    #[error("Cannot {action} from the {from} step")]
    InvalidTransition {
        /// The current step.
        from: WizardStep,
        /// The attempted action.
        action: WizardAction,
    },

    /// One or more advance preconditions are unmet.
    #[error("Wizard is not ready: {}", join(.0))]
    NotReady(Vec<UnmetPrecondition>),

    /// The submission collaborator reported a failure.
    #[error("Submission attempt {attempt} failed: {source}")]
    SubmissionFailed {
        /// Attempt number.
        attempt: u32,
        /// Collaborator error.
        #[source]
        source: SubmissionError,
    },
}

fn join(unmet: &[UnmetPrecondition]) -> String {
    unmet
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl WizardError {
    /// Returns the error code for reporting.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::NotReady(_) => "NOT_READY",
            Self::SubmissionFailed { .. } => "SUBMISSION_FAILED",
        }
    }

    /// The unmet preconditions, empty for other variants.
    #[must_use]
    pub fn unmet(&self) -> &[UnmetPrecondition] {
        match self {
            Self::NotReady(unmet) => unmet,
            _ => &[],
        }
    }
}

impl From<WizardError> for AppError {
    fn from(err: WizardError) -> Self {
        match err {
            WizardError::InvalidTransition { .. } => Self::BusinessRule(err.to_string()),
            WizardError::NotReady(_) => Self::Validation(err.to_string()),
            WizardError::SubmissionFailed { .. } => Self::ExternalService(err.to_string()),
        }
    }
}
