//! Delivery selection error types.

use docflow_shared::AppError;
use thiserror::Error;

/// Errors raised when selecting a delivery tier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryError {
    /// The index does not address a catalog entry.
    #[error("delivery tier {index} does not exist (catalog has {available})")]
    UnknownTier {
        /// The requested index.
        index: usize,
        /// Number of tiers in the catalog.
        available: usize,
    },
}

impl DeliveryError {
    /// Returns the error code for reporting.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownTier { .. } => "UNKNOWN_DELIVERY_TIER",
        }
    }
}

impl From<DeliveryError> for AppError {
    fn from(err: DeliveryError) -> Self {
        Self::NotFound(err.to_string())
    }
}
