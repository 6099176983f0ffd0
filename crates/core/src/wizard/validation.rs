//! Advance gate.

use crate::party::PartyRole;
use crate::wizard::types::{UnmetPrecondition, WizardInputs};

/// Lists every unmet advance precondition, in a stable order: delivery tier,
/// attachment, then sender and recipient fields in form order.
#[must_use]
pub fn check_readiness(inputs: &WizardInputs<'_>) -> Vec<UnmetPrecondition> {
    let mut unmet = Vec::new();

    if inputs.delivery.current(inputs.catalog).is_none() {
        unmet.push(UnmetPrecondition::NoDeliveryTier);
    }

    // presence gates, not previewability
    if inputs.attachment.is_none() {
        unmet.push(UnmetPrecondition::NoAttachment);
    }

    for party in PartyRole::ALL {
        unmet.extend(
            inputs
                .party(party)
                .missing_required()
                .into_iter()
                .map(|field| UnmetPrecondition::MissingField { party, field }),
        );
    }

    unmet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::delivery::DeliverySelection;
    use crate::party::{PartyField, PartyRecord, PartyUpdate};
    use crate::preview::{Attachment, SelectedFile};

    fn filled(catalog: &Catalog) -> PartyRecord {
        PartyRecord::new(catalog)
            .update(PartyUpdate::Name("A".into()))
            .update(PartyUpdate::AddressLine("Via X".into()))
            .update(PartyUpdate::City("Roma".into()))
            .update(PartyUpdate::PostalCode("00100".into()))
    }

    #[test]
    fn test_everything_missing() {
        let catalog = Catalog::builtin().unwrap();
        let empty = PartyRecord::new(&catalog);
        let delivery = DeliverySelection::new();
        let unmet = check_readiness(&WizardInputs {
            catalog: &catalog,
            sender: &empty,
            recipient: &empty,
            delivery: &delivery,
            attachment: None,
        });

        assert_eq!(unmet.len(), 2 + 2 * PartyField::REQUIRED.len());
        assert_eq!(unmet[0], UnmetPrecondition::NoDeliveryTier);
        assert_eq!(unmet[1], UnmetPrecondition::NoAttachment);
        assert_eq!(
            unmet[2],
            UnmetPrecondition::MissingField {
                party: PartyRole::Sender,
                field: PartyField::Name
            }
        );
    }

    #[test]
    fn test_ready_with_unsupported_attachment_and_no_contacts() {
        let catalog = Catalog::builtin().unwrap();
        let party = filled(&catalog);
        let mut delivery = DeliverySelection::new();
        delivery.select(0, &catalog).unwrap();
        let attachment =
            Attachment::from_file(SelectedFile::new("a.zip", "application/zip", "PK"));

        let inputs = WizardInputs {
            catalog: &catalog,
            sender: &party,
            recipient: &party,
            delivery: &delivery,
            attachment: Some(&attachment),
        };
        assert!(check_readiness(&inputs).is_empty());
    }

    #[test]
    fn test_recipient_gap_reported() {
        let catalog = Catalog::builtin().unwrap();
        let sender = filled(&catalog);
        let recipient = filled(&catalog).update(PartyUpdate::City(String::new()));
        let mut delivery = DeliverySelection::new();
        delivery.select(3, &catalog).unwrap();
        let attachment = Attachment::from_file(SelectedFile::new("a.pdf", "application/pdf", ""));

        let unmet = check_readiness(&WizardInputs {
            catalog: &catalog,
            sender: &sender,
            recipient: &recipient,
            delivery: &delivery,
            attachment: Some(&attachment),
        });

        assert_eq!(
            unmet,
            [UnmetPrecondition::MissingField {
                party: PartyRole::Recipient,
                field: PartyField::City
            }]
        );
    }
}
