//! Data models for country data.
//!
//! - `Country`: the record decoded from the remote endpoint
//! - `CountryRow`: the two-line display form used by list front ends

pub mod country;

pub use country::{Country, CountryRow};
