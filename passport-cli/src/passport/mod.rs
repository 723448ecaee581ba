//! Passport workbook loading
//!
//! A Passport is a fixed-layout Excel workbook describing one customer's
//! janitorial-service contract, one building per row. This module reads the
//! "Janitorial Services" sheet into ordered [`RawRow`]s.

pub mod columns;
mod error;
mod loader;
mod types;

pub use error::LoadError;
pub use loader::{load_passport, parse_rows};
pub use types::*;

/// Sheet the Passport data lives on, by exact name
pub const SHEET_NAME: &str = "Janitorial Services";
