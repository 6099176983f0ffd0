//! Sender and recipient records.
//!
//! A [`PartyRecord`] is replaced, never edited in place: every update returns
//! a new record with exactly one field changed.
//!
//! # Modules
//!
//! - `types` - PartyRecord, PartyField, PartyUpdate, PartyRole
//! - `error` - Party-specific error types

mod error;
mod types;

#[cfg(test)]
mod types_props;

pub use error::PartyError;
pub use types::{PartyField, PartyRecord, PartyRole, PartyUpdate};
