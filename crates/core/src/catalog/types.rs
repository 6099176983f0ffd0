//! Catalog domain types.

use std::collections::HashSet;
use std::fmt;

use docflow_shared::types::Money;
use docflow_shared::CatalogSettings;
use serde::Serialize;

use super::error::CatalogError;

/// A delivery/service tier the user can pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryTier {
    /// Display title, unique within the catalog.
    pub title: String,
    /// Short description of the service level.
    pub description: String,
    /// Icon reference for the presentation layer.
    pub icon: String,
    /// Optional indicative price.
    pub price: Option<Money>,
}

impl DeliveryTier {
    /// Price formatted with two decimals, `"0.00"` when the tier has none.
    #[must_use]
    pub fn display_price(&self) -> String {
        self.price
            .map_or_else(|| "0.00".to_string(), |p| p.format_amount())
    }
}

/// A country drawn from the catalog.
///
/// There is no public constructor: values only come out of
/// [`Catalog::country`] or [`Catalog::default_country`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Country(String);

impl Country {
    /// Returns the country name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone dialing prefix drawn from the catalog.
///
/// Like [`Country`], only the catalog hands these out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PhonePrefix {
    code: String,
    country: String,
}

impl PhonePrefix {
    /// Dialing code including the leading `+`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Country or region label.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }
}

impl fmt::Display for PhonePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.country)
    }
}

/// Read-only catalogs for one wizard session.
///
/// Invariant: every list holds at least one entry and keys are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tiers: Vec<DeliveryTier>,
    countries: Vec<Country>,
    phone_prefixes: Vec<PhonePrefix>,
}

impl Catalog {
    /// Builds a catalog from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a list is empty, a key is blank or duplicated, or
    /// a tier price is negative.
    pub fn from_settings(settings: &CatalogSettings) -> Result<Self, CatalogError> {
        if settings.tiers.is_empty() {
            return Err(CatalogError::NoTiers);
        }
        if settings.countries.is_empty() {
            return Err(CatalogError::NoCountries);
        }
        if settings.phone_prefixes.is_empty() {
            return Err(CatalogError::NoPhonePrefixes);
        }

        let mut seen = HashSet::new();
        let mut tiers = Vec::with_capacity(settings.tiers.len());
        for tier in &settings.tiers {
            let title = tier.title.trim();
            if title.is_empty() {
                return Err(CatalogError::BlankEntry("tier"));
            }
            if !seen.insert(title.to_string()) {
                return Err(CatalogError::DuplicateTier(title.to_string()));
            }
            let price = tier.price.map(|p| Money::new(p, settings.currency));
            if price.is_some_and(|p| p.is_negative()) {
                return Err(CatalogError::NegativePrice(title.to_string()));
            }
            tiers.push(DeliveryTier {
                title: title.to_string(),
                description: tier.description.clone(),
                icon: tier.icon.clone(),
                price,
            });
        }

        seen.clear();
        let mut countries = Vec::with_capacity(settings.countries.len());
        for name in &settings.countries {
            let name = name.trim();
            if name.is_empty() {
                return Err(CatalogError::BlankEntry("country"));
            }
            if !seen.insert(name.to_string()) {
                return Err(CatalogError::DuplicateCountry(name.to_string()));
            }
            countries.push(Country(name.to_string()));
        }

        seen.clear();
        let mut phone_prefixes = Vec::with_capacity(settings.phone_prefixes.len());
        for prefix in &settings.phone_prefixes {
            let code = prefix.code.trim();
            if code.is_empty() {
                return Err(CatalogError::BlankEntry("phone prefix"));
            }
            if !seen.insert(code.to_string()) {
                return Err(CatalogError::DuplicatePhonePrefix(code.to_string()));
            }
            phone_prefixes.push(PhonePrefix {
                code: code.to_string(),
                country: prefix.country.trim().to_string(),
            });
        }

        Ok(Self {
            tiers,
            countries,
            phone_prefixes,
        })
    }

    /// Builds the built-in catalog (four tiers, ten countries, eight prefixes).
    ///
    /// # Errors
    ///
    /// Only fails if the built-in defaults are themselves inconsistent.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_settings(&CatalogSettings::default())
    }

    /// All delivery tiers in display order.
    #[must_use]
    pub fn tiers(&self) -> &[DeliveryTier] {
        &self.tiers
    }

    /// Returns the tier at `index`, if any.
    #[must_use]
    pub fn tier(&self, index: usize) -> Option<&DeliveryTier> {
        self.tiers.get(index)
    }

    /// All countries in display order.
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Looks up a country by exact name.
    #[must_use]
    pub fn country(&self, name: &str) -> Option<Country> {
        self.countries.iter().find(|c| c.0 == name).cloned()
    }

    /// First country of the catalog, used for fresh party records.
    #[must_use]
    pub fn default_country(&self) -> Country {
        // non-empty by construction
        self.countries[0].clone()
    }

    /// All phone prefixes in display order.
    #[must_use]
    pub fn phone_prefixes(&self) -> &[PhonePrefix] {
        &self.phone_prefixes
    }

    /// Looks up a phone prefix by its dialing code.
    #[must_use]
    pub fn phone_prefix(&self, code: &str) -> Option<PhonePrefix> {
        self.phone_prefixes.iter().find(|p| p.code == code).cloned()
    }

    /// First phone prefix of the catalog, used for fresh party records.
    #[must_use]
    pub fn default_phone_prefix(&self) -> PhonePrefix {
        // non-empty by construction
        self.phone_prefixes[0].clone()
    }
}
