//! Shared types, errors, and configuration for Slovy.
//!
//! This crate provides common types used by the converters:
//! - Validated numeric input backed by `rust_decimal`
//! - The conversion error taxonomy
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{SlovyConfig, WordsConfig};
pub use error::{WordsError, WordsResult};
pub use types::{Amount, MinorUnits, ValidatedAmount};
