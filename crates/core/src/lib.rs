//! Core business logic for Docflow.
//!
//! This crate contains the document-shipping wizard with ZERO UI or transport
//! dependencies. Domain types, the advance gate, preview resource handling
//! and the submission seam all live here.
//!
//! # Modules
//!
//! - `catalog` - Delivery tiers, countries and phone prefixes
//! - `party` - Sender and recipient records
//! - `delivery` - Delivery tier selection
//! - `preview` - Attachment intake and preview resource lifecycle
//! - `submission` - Submission collaborator seam and simulated gateway
//! - `summary` - Review step snapshot
//! - `wizard` - Step machine and per-user session

pub mod catalog;
pub mod delivery;
pub mod party;
pub mod preview;
pub mod submission;
pub mod summary;
pub mod wizard;
