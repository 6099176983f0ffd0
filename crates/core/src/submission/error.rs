//! Submission error types.

use docflow_shared::AppError;
use thiserror::Error;

/// Failures reported by a submission collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// The gateway processed the request and refused it.
    #[error("submission declined: {0}")]
    Declined(String),

    /// The gateway could not be reached or did not answer.
    #[error("submission gateway unavailable: {0}")]
    Unavailable(String),
}

impl SubmissionError {
    /// Returns the error code for reporting.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Declined(_) => "SUBMISSION_DECLINED",
            Self::Unavailable(_) => "SUBMISSION_UNAVAILABLE",
        }
    }

    /// Human-readable reason without the variant prefix.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::Declined(reason) | Self::Unavailable(reason) => reason,
        }
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        Self::ExternalService(err.to_string())
    }
}
