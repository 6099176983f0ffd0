//! Finalize (payment/dispatch) collaborator seam.
//!
//! The wizard only knows that a submission eventually succeeds or fails.
//! Anything beyond that lives behind [`SubmissionCoordinator`].
//!
//! # Modules
//!
//! - `types` - SubmissionOutcome, SubmissionRecord, SubmissionReceipt
//! - `error` - Submission error types
//! - `coordinator` - Collaborator trait and the simulated gateway

mod coordinator;
mod error;
mod types;

pub use coordinator::{SimulatedGateway, SubmissionCoordinator};
pub use error::SubmissionError;
pub use types::{SubmissionOutcome, SubmissionReceipt, SubmissionRecord};
