//! Static catalogs offered by the wizard.
//!
//! Delivery tiers, countries and phone prefixes are supplied once at
//! construction and never change for the lifetime of a session. Country and
//! phone prefix values can only be obtained from a [`Catalog`], which is how
//! party records are kept free of arbitrary text in those fields.

mod error;
mod types;

pub use error::CatalogError;
pub use types::{Catalog, Country, DeliveryTier, PhonePrefix};
