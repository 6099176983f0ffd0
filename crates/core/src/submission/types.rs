//! Submission outcome types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result state of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionOutcome {
    /// The collaborator has not answered yet.
    Pending,
    /// The collaborator accepted the submission.
    Succeeded,
    /// The collaborator refused or could not process the submission.
    Failed,
}

impl SubmissionOutcome {
    /// Returns the string representation of the outcome.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }

    /// Returns true once the attempt has resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Acknowledgement returned by a collaborator on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    /// Message to show the user.
    pub message: String,
    /// Collaborator-side reference, if it issues one.
    pub reference: Option<String>,
}

impl SubmissionReceipt {
    /// Creates a receipt with a message and no reference.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            reference: None,
        }
    }
}

/// The latest submission attempt as seen by the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    /// Attempt number, starting at 1 for each controller.
    pub attempt: u32,
    /// Current outcome.
    pub outcome: SubmissionOutcome,
    /// Receipt or failure message once resolved.
    pub message: Option<String>,
    /// Collaborator reference on success.
    pub reference: Option<String>,
    /// When the attempt started.
    pub started_at: DateTime<Utc>,
    /// When the attempt resolved.
    pub resolved_at: Option<DateTime<Utc>>,
}

impl SubmissionRecord {
    /// A freshly started attempt.
    #[must_use]
    pub fn pending(attempt: u32) -> Self {
        Self {
            attempt,
            outcome: SubmissionOutcome::Pending,
            message: None,
            reference: None,
            started_at: Utc::now(),
            resolved_at: None,
        }
    }

    /// Marks the attempt as succeeded.
    #[must_use]
    pub fn succeed(mut self, receipt: SubmissionReceipt) -> Self {
        self.outcome = SubmissionOutcome::Succeeded;
        self.message = Some(receipt.message);
        self.reference = receipt.reference;
        self.resolved_at = Some(Utc::now());
        self
    }

    /// Marks the attempt as failed.
    #[must_use]
    pub fn fail(mut self, message: impl Into<String>) -> Self {
        self.outcome = SubmissionOutcome::Failed;
        self.message = Some(message.into());
        self.resolved_at = Some(Utc::now());
        self
    }
}
