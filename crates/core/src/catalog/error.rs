//! Catalog error types.

use docflow_shared::AppError;
use thiserror::Error;

/// Errors raised while building a catalog from settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No delivery tiers configured.
    #[error("catalog has no delivery tiers")]
    NoTiers,

    /// No countries configured.
    #[error("catalog has no countries")]
    NoCountries,

    /// No phone prefixes configured.
    #[error("catalog has no phone prefixes")]
    NoPhonePrefixes,

    /// Two tiers share a title.
    #[error("duplicate delivery tier: {0}")]
    DuplicateTier(String),

    /// A country appears twice.
    #[error("duplicate country: {0}")]
    DuplicateCountry(String),

    /// A phone prefix code appears twice.
    #[error("duplicate phone prefix: {0}")]
    DuplicatePhonePrefix(String),

    /// An entry has an empty key.
    #[error("blank {0} entry in catalog")]
    BlankEntry(&'static str),

    /// A tier price is negative.
    #[error("delivery tier {0} has a negative price")]
    NegativePrice(String),
}

impl CatalogError {
    /// Returns the error code for reporting.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoTiers => "CATALOG_NO_TIERS",
            Self::NoCountries => "CATALOG_NO_COUNTRIES",
            Self::NoPhonePrefixes => "CATALOG_NO_PHONE_PREFIXES",
            Self::DuplicateTier(_) => "CATALOG_DUPLICATE_TIER",
            Self::DuplicateCountry(_) => "CATALOG_DUPLICATE_COUNTRY",
            Self::DuplicatePhonePrefix(_) => "CATALOG_DUPLICATE_PHONE_PREFIX",
            Self::BlankEntry(_) => "CATALOG_BLANK_ENTRY",
            Self::NegativePrice(_) => "CATALOG_NEGATIVE_PRICE",
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        Self::Configuration(err.to_string())
    }
}
