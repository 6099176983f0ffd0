//! Party domain types.

use std::fmt;

use serde::Serialize;

use super::error::PartyError;
use crate::catalog::{Catalog, Country, PhonePrefix};

/// Which side of the shipment a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyRole {
    /// The party sending the document.
    Sender,
    /// The party receiving the document.
    Recipient,
}

impl PartyRole {
    /// Both roles, sender first.
    pub const ALL: [Self; 2] = [Self::Sender, Self::Recipient];

    /// Returns the string representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sender => "sender",
            Self::Recipient => "recipient",
        }
    }

    /// Parses a role from a string.
    pub fn parse(s: &str) -> Result<Self, PartyError> {
        match s.to_lowercase().as_str() {
            "sender" => Ok(Self::Sender),
            "recipient" => Ok(Self::Recipient),
            _ => Err(PartyError::UnknownRole(s.to_string())),
        }
    }
}

impl fmt::Display for PartyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field of a [`PartyRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyField {
    /// Full name or company name.
    Name,
    /// Country, drawn from the catalog.
    Country,
    /// Street address.
    AddressLine,
    /// City.
    City,
    /// Postal code.
    PostalCode,
    /// Phone dialing prefix, drawn from the catalog.
    PhonePrefix,
    /// Phone number without prefix.
    PhoneNumber,
    /// Email address.
    Email,
}

impl PartyField {
    /// Every field, in form order.
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::Country,
        Self::AddressLine,
        Self::City,
        Self::PostalCode,
        Self::PhonePrefix,
        Self::PhoneNumber,
        Self::Email,
    ];

    /// Fields that must be non-empty before the wizard can advance.
    pub const REQUIRED: [Self; 4] = [Self::Name, Self::AddressLine, Self::City, Self::PostalCode];

    /// Returns the string representation of the field.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Country => "country",
            Self::AddressLine => "address_line",
            Self::City => "city",
            Self::PostalCode => "postal_code",
            Self::PhonePrefix => "phone_prefix",
            Self::PhoneNumber => "phone_number",
            Self::Email => "email",
        }
    }

    /// Parses a field from its string representation.
    pub fn parse(s: &str) -> Result<Self, PartyError> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| PartyError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for PartyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-field change to a party record.
///
/// Catalog-backed fields carry catalog-issued values, so an update can never
/// smuggle free text into them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartyUpdate {
    /// Replace the name.
    Name(String),
    /// Replace the country.
    Country(Country),
    /// Replace the street address.
    AddressLine(String),
    /// Replace the city.
    City(String),
    /// Replace the postal code.
    PostalCode(String),
    /// Replace the phone prefix.
    PhonePrefix(PhonePrefix),
    /// Replace the phone number.
    PhoneNumber(String),
    /// Replace the email.
    Email(String),
}

impl PartyUpdate {
    /// Resolves a string-keyed change against the catalog.
    ///
    /// Unknown countries and phone prefixes are rejected rather than stored.
    pub fn resolve(field: PartyField, value: &str, catalog: &Catalog) -> Result<Self, PartyError> {
        Ok(match field {
            PartyField::Name => Self::Name(value.to_string()),
            PartyField::Country => Self::Country(
                catalog
                    .country(value)
                    .ok_or_else(|| PartyError::UnknownCountry(value.to_string()))?,
            ),
            PartyField::AddressLine => Self::AddressLine(value.to_string()),
            PartyField::City => Self::City(value.to_string()),
            PartyField::PostalCode => Self::PostalCode(value.to_string()),
            PartyField::PhonePrefix => Self::PhonePrefix(
                catalog
                    .phone_prefix(value)
                    .ok_or_else(|| PartyError::UnknownPhonePrefix(value.to_string()))?,
            ),
            PartyField::PhoneNumber => Self::PhoneNumber(value.to_string()),
            PartyField::Email => Self::Email(value.to_string()),
        })
    }

    /// The field this update targets.
    #[must_use]
    pub fn field(&self) -> PartyField {
        match self {
            Self::Name(_) => PartyField::Name,
            Self::Country(_) => PartyField::Country,
            Self::AddressLine(_) => PartyField::AddressLine,
            Self::City(_) => PartyField::City,
            Self::PostalCode(_) => PartyField::PostalCode,
            Self::PhonePrefix(_) => PartyField::PhonePrefix,
            Self::PhoneNumber(_) => PartyField::PhoneNumber,
            Self::Email(_) => PartyField::Email,
        }
    }
}

/// Address and contact particulars of one party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyRecord {
    name: String,
    country: Country,
    address_line: String,
    city: String,
    postal_code: String,
    phone_prefix: PhonePrefix,
    phone_number: String,
    email: String,
}

impl PartyRecord {
    /// Creates an empty record with the catalog's default country and prefix.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            name: String::new(),
            country: catalog.default_country(),
            address_line: String::new(),
            city: String::new(),
            postal_code: String::new(),
            phone_prefix: catalog.default_phone_prefix(),
            phone_number: String::new(),
            email: String::new(),
        }
    }

    /// Returns a copy of this record with exactly one field replaced.
    #[must_use]
    pub fn update(&self, update: PartyUpdate) -> Self {
        let mut next = self.clone();
        match update {
            PartyUpdate::Name(v) => next.name = v,
            PartyUpdate::Country(v) => next.country = v,
            PartyUpdate::AddressLine(v) => next.address_line = v,
            PartyUpdate::City(v) => next.city = v,
            PartyUpdate::PostalCode(v) => next.postal_code = v,
            PartyUpdate::PhonePrefix(v) => next.phone_prefix = v,
            PartyUpdate::PhoneNumber(v) => next.phone_number = v,
            PartyUpdate::Email(v) => next.email = v,
        }
        next
    }

    /// String-keyed form of [`update`](Self::update).
    pub fn update_field(
        &self,
        field: PartyField,
        value: &str,
        catalog: &Catalog,
    ) -> Result<Self, PartyError> {
        Ok(self.update(PartyUpdate::resolve(field, value, catalog)?))
    }

    /// Returns the textual value of a field.
    ///
    /// Country yields its name, phone prefix its dialing code.
    #[must_use]
    pub fn get(&self, field: PartyField) -> &str {
        match field {
            PartyField::Name => &self.name,
            PartyField::Country => self.country.as_str(),
            PartyField::AddressLine => &self.address_line,
            PartyField::City => &self.city,
            PartyField::PostalCode => &self.postal_code,
            PartyField::PhonePrefix => self.phone_prefix.code(),
            PartyField::PhoneNumber => &self.phone_number,
            PartyField::Email => &self.email,
        }
    }

    /// Full name or company name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Country.
    #[must_use]
    pub fn country(&self) -> &Country {
        &self.country
    }

    /// Phone prefix.
    #[must_use]
    pub fn phone_prefix(&self) -> &PhonePrefix {
        &self.phone_prefix
    }

    /// Required fields that are empty or whitespace only.
    #[must_use]
    pub fn missing_required(&self) -> Vec<PartyField> {
        PartyField::REQUIRED
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    /// Phone number with its prefix, empty when no number was entered.
    #[must_use]
    pub fn formatted_phone(&self) -> String {
        let number = self.phone_number.trim();
        if number.is_empty() {
            String::new()
        } else {
            format!("{} {number}", self.phone_prefix.code())
        }
    }
}
