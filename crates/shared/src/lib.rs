//! Shared types, errors, and configuration for Docflow.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision (tier prices)
//! - Typed IDs for sessions and preview resources
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{
    AppConfig, CatalogSettings, GatewayOutcome, GatewaySettings, LoggingSettings,
    PhonePrefixSettings, TierSettings,
};
pub use error::AppError;
