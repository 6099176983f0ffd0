//! Two-step order wizard.
//!
//! The user fills in the capture step (tier, parties, document), advances to
//! a review step that shows everything read-only, and confirms from there.
//!
//! # Modules
//!
//! - `types` - Steps, actions, the borrowed input view and unmet preconditions
//! - `error` - Wizard-specific error types
//! - `validation` - The advance gate
//! - `controller` - Step transitions and submission handling
//! - `session` - Owns all wizard state for one user

pub mod controller;
pub mod error;
pub mod session;
pub mod types;
pub mod validation;

#[cfg(test)]
mod controller_props;

pub use controller::WizardController;
pub use error::WizardError;
pub use session::{SessionSnapshot, WizardSession};
pub use types::{UnmetPrecondition, WizardAction, WizardInputs, WizardStep};
pub use validation::check_readiness;
