//! Party error types.

use docflow_shared::AppError;
use thiserror::Error;

/// Errors raised by string-keyed party updates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PartyError {
    /// The field name is not part of a party record.
    #[error("unknown party field: {0}")]
    UnknownField(String),

    /// The country is not in the catalog.
    #[error("country {0} is not in the catalog")]
    UnknownCountry(String),

    /// The phone prefix is not in the catalog.
    #[error("phone prefix {0} is not in the catalog")]
    UnknownPhonePrefix(String),

    /// The role name is neither sender nor recipient.
    #[error("unknown party role: {0}")]
    UnknownRole(String),
}

impl PartyError {
    /// Returns the error code for reporting.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownField(_) => "UNKNOWN_PARTY_FIELD",
            Self::UnknownCountry(_) => "UNKNOWN_COUNTRY",
            Self::UnknownPhonePrefix(_) => "UNKNOWN_PHONE_PREFIX",
            Self::UnknownRole(_) => "UNKNOWN_PARTY_ROLE",
        }
    }
}

impl From<PartyError> for AppError {
    fn from(err: PartyError) -> Self {
        Self::Validation(err.to_string())
    }
}
