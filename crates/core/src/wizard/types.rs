//! Wizard domain types.
//!
//! This module defines the step enumeration, the actions that move between
//! steps, and the borrowed view of user data the controller reads.

use std::fmt;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::delivery::DeliverySelection;
use crate::party::{PartyField, PartyRecord, PartyRole};
use crate::preview::Attachment;

/// Wizard step.
///
/// The valid transitions are:
/// - Capture → Review (advance)
/// - Review → Capture (retreat)
/// - Review → Review (submit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    /// Data entry: tier, parties, document.
    #[default]
    Capture,
    /// Consolidated summary with the confirm action.
    Review,
}

impl WizardStep {
    /// Returns the string representation of the step.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Capture => "capture",
            Self::Review => "review",
        }
    }

    /// Transition table: the step reached by `action`, or `None` if the
    /// action is not allowed from this step.
    #[must_use]
    pub fn next(self, action: WizardAction) -> Option<Self> {
        match (self, action) {
            (Self::Capture, WizardAction::Advance) | (Self::Review, WizardAction::Submit) => {
                Some(Self::Review)
            }
            (Self::Review, WizardAction::Retreat) => Some(Self::Capture),
            _ => None,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User action driving the step machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardAction {
    /// Move from capture to review (includes the first submission).
    Advance,
    /// Go back to capture.
    Retreat,
    /// Confirm and submit again from review.
    Submit,
}

impl WizardAction {
    /// Returns the string representation of the action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Advance => "advance",
            Self::Retreat => "retreat",
            Self::Submit => "submit",
        }
    }
}

impl fmt::Display for WizardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view of the data the controller reads to gate transitions.
///
/// The controller never owns or mutates any of it.
#[derive(Debug, Clone, Copy)]
pub struct WizardInputs<'a> {
    /// Catalog the selection indexes into.
    pub catalog: &'a Catalog,
    /// Sender record.
    pub sender: &'a PartyRecord,
    /// Recipient record.
    pub recipient: &'a PartyRecord,
    /// Delivery tier selection.
    pub delivery: &'a DeliverySelection,
    /// Current attachment, previewable or not.
    pub attachment: Option<&'a Attachment>,
}

impl<'a> WizardInputs<'a> {
    /// The record for `role`.
    #[must_use]
    pub fn party(&self, role: PartyRole) -> &'a PartyRecord {
        match role {
            PartyRole::Sender => self.sender,
            PartyRole::Recipient => self.recipient,
        }
    }
}

/// One reason the wizard cannot advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnmetPrecondition {
    /// No delivery tier selected.
    NoDeliveryTier,
    /// No document attached.
    NoAttachment,
    /// A required party field is empty.
    MissingField {
        /// Which party.
        party: PartyRole,
        /// Which field.
        field: PartyField,
    },
}

impl fmt::Display for UnmetPrecondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDeliveryTier => f.write_str("no delivery tier selected"),
            Self::NoAttachment => f.write_str("no document attached"),
            Self::MissingField { party, field } => write!(f, "{party} {field} is empty"),
        }
    }
}
