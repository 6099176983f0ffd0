//! Property-based tests for FilePreviewManager.
//!
//! Random sequences of picker actions must never leave more than one live
//! preview, and every allocation must be matched by exactly one release once
//! the manager is gone.

use proptest::prelude::*;

use crate::preview::manager::FilePreviewManager;
use crate::preview::store::PreviewStore;
use crate::preview::types::{MediaKind, SelectedFile};

#[derive(Debug, Clone)]
enum PickerAction {
    Set(String),
    Select(Option<String>),
    Clear,
}

/// Strategy for content types across all three media kinds.
fn arb_content_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("image/png".to_string()),
        Just("image/jpeg".to_string()),
        Just("application/pdf".to_string()),
        Just("application/zip".to_string()),
        "[a-z]{1,8}/[a-z]{1,8}",
    ]
}

fn arb_action() -> impl Strategy<Value = PickerAction> {
    prop_oneof![
        arb_content_type().prop_map(PickerAction::Set),
        proptest::option::of(arb_content_type()).prop_map(PickerAction::Select),
        Just(PickerAction::Clear),
    ]
}

fn file(content_type: &str) -> SelectedFile {
    SelectedFile::new("upload", content_type, vec![1, 2, 3])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// At most one live preview at every step, and it matches the attachment.
    #[test]
    fn prop_at_most_one_live_preview(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let store = PreviewStore::new();
        let mut manager = FilePreviewManager::new(store.clone());

        for action in actions {
            let previous = manager.current_preview().map(|p| p.id());
            match action {
                PickerAction::Set(ct) => { manager.set_attachment(file(&ct)); }
                PickerAction::Select(ct) => { manager.select(ct.as_deref().map(file)); }
                PickerAction::Clear => manager.clear(),
            }

            prop_assert!(store.live_count() <= 1);

            let expected_live = manager
                .attachment()
                .is_some_and(|a| a.kind() != MediaKind::Unsupported);
            prop_assert_eq!(manager.current_preview().is_some(), expected_live);
            prop_assert_eq!(store.live_count(), usize::from(expected_live));

            // a replaced preview never survives
            if let Some(old) = previous {
                if manager.current_preview().map(|p| p.id()) != Some(old) {
                    prop_assert!(!store.is_live(old));
                }
            }
        }

        drop(manager);
        prop_assert_eq!(store.live_count(), 0);
        prop_assert_eq!(store.allocated_total(), store.released_total());
    }

    /// Clearing twice is the same as clearing once.
    #[test]
    fn prop_clear_twice_equals_once(ct in arb_content_type()) {
        let store = PreviewStore::new();
        let mut manager = FilePreviewManager::new(store.clone());
        manager.set_attachment(file(&ct));

        manager.clear();
        let released_after_one = store.released_total();
        manager.clear();

        prop_assert_eq!(store.released_total(), released_after_one);
        prop_assert!(manager.attachment().is_none());
        prop_assert_eq!(store.live_count(), 0);
    }
}
