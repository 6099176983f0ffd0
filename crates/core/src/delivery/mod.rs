//! Delivery tier selection.

mod error;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, DeliveryTier};

pub use error::DeliveryError;

/// The tier currently chosen by the user, as an index into the catalog.
///
/// At most one tier is selected; `None` means nothing has been picked yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeliverySelection {
    index: Option<usize>,
}

impl DeliverySelection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the tier at `index`.
    ///
    /// Returns `true` if the selection changed, `false` when the same tier
    /// was already selected.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError::UnknownTier` if the catalog has no such tier;
    /// the current selection is kept.
    pub fn select(&mut self, index: usize, catalog: &Catalog) -> Result<bool, DeliveryError> {
        if catalog.tier(index).is_none() {
            return Err(DeliveryError::UnknownTier {
                index,
                available: catalog.tiers().len(),
            });
        }
        if self.index == Some(index) {
            return Ok(false);
        }
        debug!(from = ?self.index, to = index, "delivery tier selected");
        self.index = Some(index);
        Ok(true)
    }

    /// Returns the selected tier, if any.
    #[must_use]
    pub fn current<'a>(&self, catalog: &'a Catalog) -> Option<&'a DeliveryTier> {
        self.index.and_then(|i| catalog.tier(i))
    }

    /// Returns the selected index, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}
