//! Consolidated order summary shown on the review step.
//!
//! The same snapshot is handed to the submission collaborator, so what the
//! user confirmed is exactly what gets submitted.

use serde::Serialize;

use crate::party::PartyRecord;
use crate::preview::{Attachment, MediaKind};
use crate::wizard::WizardInputs;

/// Label used when no document is attached.
pub const NO_ATTACHMENT_LABEL: &str = "No file";

/// Read-only snapshot of everything the user entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    /// Selected delivery tier.
    pub tier: Option<TierSummary>,
    /// Sender particulars.
    pub sender: PartySummary,
    /// Recipient particulars.
    pub recipient: PartySummary,
    /// Attached document.
    pub attachment: Option<AttachmentSummary>,
}

/// Delivery tier as shown on the review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierSummary {
    /// Catalog index.
    pub index: usize,
    /// Display title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Indicative price with two decimals, `"0.00"` when unpriced.
    pub price: String,
}

/// Party particulars as shown on the review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartySummary {
    /// Name.
    pub name: String,
    /// Country.
    pub country: String,
    /// Street address.
    pub address_line: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
    /// Phone with prefix, empty when none.
    pub phone: String,
    /// Email.
    pub email: String,
}

impl From<&PartyRecord> for PartySummary {
    fn from(record: &PartyRecord) -> Self {
        use crate::party::PartyField;

        Self {
            name: record.get(PartyField::Name).to_string(),
            country: record.get(PartyField::Country).to_string(),
            address_line: record.get(PartyField::AddressLine).to_string(),
            city: record.get(PartyField::City).to_string(),
            postal_code: record.get(PartyField::PostalCode).to_string(),
            phone: record.formatted_phone(),
            email: record.get(PartyField::Email).to_string(),
        }
    }
}

/// Attachment as shown on the review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentSummary {
    /// Original file name.
    pub file_name: String,
    /// Declared content type.
    pub content_type: String,
    /// Media classification.
    pub kind: MediaKind,
    /// Size in bytes.
    pub size: usize,
}

impl From<&Attachment> for AttachmentSummary {
    fn from(attachment: &Attachment) -> Self {
        Self {
            file_name: attachment.file_name().to_string(),
            content_type: attachment.content_type().to_string(),
            kind: attachment.kind(),
            size: attachment.size(),
        }
    }
}

impl ReviewSummary {
    /// Builds the summary from the current wizard inputs.
    #[must_use]
    pub fn build(inputs: &WizardInputs<'_>) -> Self {
        let tier = inputs.delivery.index().and_then(|index| {
            inputs.catalog.tier(index).map(|tier| TierSummary {
                index,
                title: tier.title.clone(),
                description: tier.description.clone(),
                price: tier.display_price(),
            })
        });

        Self {
            tier,
            sender: PartySummary::from(inputs.sender),
            recipient: PartySummary::from(inputs.recipient),
            attachment: inputs.attachment.map(AttachmentSummary::from),
        }
    }

    /// File name of the attachment, or [`NO_ATTACHMENT_LABEL`].
    #[must_use]
    pub fn attachment_label(&self) -> &str {
        self.attachment
            .as_ref()
            .map_or(NO_ATTACHMENT_LABEL, |a| a.file_name.as_str())
    }
}
