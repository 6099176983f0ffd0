//! Property-based tests for PartyRecord updates.

use std::collections::HashMap;

use proptest::prelude::*;

use crate::catalog::Catalog;
use crate::party::types::{PartyField, PartyRecord};

/// Strategy for picking any field.
fn arb_field() -> impl Strategy<Value = PartyField> {
    proptest::sample::select(PartyField::ALL.to_vec())
}

/// Strategy for a field paired with a value the catalog accepts for it.
fn arb_change() -> impl Strategy<Value = (PartyField, String)> {
    let catalog = Catalog::builtin().unwrap();
    let countries: Vec<String> = catalog
        .countries()
        .iter()
        .map(|c| c.as_str().to_string())
        .collect();
    let prefixes: Vec<String> = catalog
        .phone_prefixes()
        .iter()
        .map(|p| p.code().to_string())
        .collect();

    arb_field().prop_flat_map(move |field| {
        let value = match field {
            PartyField::Country => proptest::sample::select(countries.clone()).boxed(),
            PartyField::PhonePrefix => proptest::sample::select(prefixes.clone()).boxed(),
            _ => "[a-zA-Z0-9 ]{0,20}".boxed(),
        };
        (Just(field), value)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Applying a sequence of updates equals replaying them on a plain map:
    /// nothing lost, nothing reordered, untouched fields unchanged.
    #[test]
    fn prop_updates_apply_in_order(changes in proptest::collection::vec(arb_change(), 0..30)) {
        let catalog = Catalog::builtin().unwrap();
        let initial = PartyRecord::new(&catalog);

        let mut expected: HashMap<PartyField, String> = PartyField::ALL
            .into_iter()
            .map(|f| (f, initial.get(f).to_string()))
            .collect();

        let mut record = initial.clone();
        for (field, value) in &changes {
            record = record.update_field(*field, value, &catalog).unwrap();
            expected.insert(*field, value.clone());
        }

        for field in PartyField::ALL {
            prop_assert_eq!(record.get(field), expected[&field].as_str());
        }
    }

    /// Updates to distinct fields commute.
    #[test]
    fn prop_distinct_fields_commute(a in arb_change(), b in arb_change()) {
        prop_assume!(a.0 != b.0);
        let catalog = Catalog::builtin().unwrap();
        let base = PartyRecord::new(&catalog);

        let ab = base
            .update_field(a.0, &a.1, &catalog).unwrap()
            .update_field(b.0, &b.1, &catalog).unwrap();
        let ba = base
            .update_field(b.0, &b.1, &catalog).unwrap()
            .update_field(a.0, &a.1, &catalog).unwrap();

        prop_assert_eq!(ab, ba);
    }

    /// Writing the same value twice is the same as writing it once.
    #[test]
    fn prop_same_field_update_is_idempotent(change in arb_change()) {
        let catalog = Catalog::builtin().unwrap();
        let once = PartyRecord::new(&catalog)
            .update_field(change.0, &change.1, &catalog).unwrap();
        let twice = once.update_field(change.0, &change.1, &catalog).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Free text never lands in catalog-backed fields.
    #[test]
    fn prop_catalog_fields_reject_free_text(value in "[a-z]{1,12}") {
        let catalog = Catalog::builtin().unwrap();
        let record = PartyRecord::new(&catalog);
        prop_assume!(catalog.country(&value).is_none());
        prop_assert!(record.update_field(PartyField::Country, &value, &catalog).is_err());
        prop_assert!(record.update_field(PartyField::PhonePrefix, &value, &catalog).is_err());
    }
}
