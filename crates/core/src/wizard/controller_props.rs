//! Property-based tests for WizardController and WizardSession.
//!
//! The gate must refuse every incomplete form without contacting the
//! collaborator, and stepping back from review must never alter data.

use std::time::Duration;

use futures::executor::block_on;
use proptest::prelude::*;

use crate::catalog::Catalog;
use crate::party::{PartyField, PartyRole};
use crate::preview::SelectedFile;
use crate::submission::SimulatedGateway;
use crate::wizard::error::WizardError;
use crate::wizard::session::WizardSession;
use crate::wizard::types::{UnmetPrecondition, WizardStep};

fn session() -> WizardSession<SimulatedGateway> {
    WizardSession::new(
        Catalog::builtin().unwrap(),
        SimulatedGateway::default().with_latency(Duration::ZERO),
    )
}

/// Strategy for required-field values, blank ones included.
fn arb_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[A-Za-z0-9][A-Za-z0-9 ]{0,20}",
    ]
}

/// Strategy for one value per (role, required field).
fn arb_form() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(arb_value(), 8)
}

fn apply_form(session: &mut WizardSession<SimulatedGateway>, form: &[String]) {
    let slots = PartyRole::ALL
        .into_iter()
        .flat_map(|role| PartyField::REQUIRED.into_iter().map(move |field| (role, field)));
    for ((role, field), value) in slots.zip(form) {
        session.update_party_field(role, field, value).unwrap();
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Without a tier, advance always fails and never submits.
    #[test]
    fn prop_no_tier_never_advances(
        form in arb_form(),
        attach in any::<bool>(),
    ) {
        let mut session = session();
        apply_form(&mut session, &form);
        if attach {
            session.set_attachment(SelectedFile::new("a.pdf", "application/pdf", vec![1]));
        }

        let result = block_on(session.advance());

        match result {
            Err(WizardError::NotReady(unmet)) => {
                prop_assert_eq!(unmet.first(), Some(&UnmetPrecondition::NoDeliveryTier));
            }
            other => prop_assert!(false, "expected NotReady, got {:?}", other),
        }
        prop_assert_eq!(session.step(), WizardStep::Capture);
        prop_assert!(session.controller().last_submission().is_none());
    }

    /// Advance succeeds exactly when every required field is non-blank.
    #[test]
    fn prop_gate_matches_required_fields(form in arb_form(), tier in 0usize..4) {
        let mut session = session();
        session.select_tier(tier).unwrap();
        apply_form(&mut session, &form);
        session.set_attachment(SelectedFile::new("a.png", "image/png", vec![1]));

        let complete = form.iter().all(|v| !v.trim().is_empty());
        let result = block_on(session.advance());

        prop_assert_eq!(result.is_ok(), complete);
        if let Err(err) = result {
            let blanks = form.iter().filter(|v| v.trim().is_empty()).count();
            prop_assert_eq!(err.unmet().len(), blanks);
        }
    }

    /// Review then retreat leaves the summary untouched.
    #[test]
    fn prop_retreat_preserves_data(
        name in "[A-Za-z]{1,12}",
        country_index in 0usize..10,
        tier in 0usize..4,
    ) {
        let mut session = session();
        let countries: Vec<String> = session
            .catalog()
            .countries()
            .iter()
            .map(|c| c.as_str().to_string())
            .collect();
        let country = &countries[country_index % countries.len()];
        session.select_tier(tier).unwrap();
        for role in PartyRole::ALL {
            for field in PartyField::REQUIRED {
                session.update_party_field(role, field, &name).unwrap();
            }
            session.update_party_field(role, PartyField::Country, country).unwrap();
        }
        session.set_attachment(SelectedFile::new("a.pdf", "application/pdf", vec![1]));
        block_on(session.advance()).unwrap();
        let before = session.summary();

        prop_assert_eq!(session.retreat().unwrap(), WizardStep::Capture);
        prop_assert_eq!(session.summary(), before);
        prop_assert!(session.files().current_preview().is_some());
    }
}
