//! REST client module for the countries endpoint.
//!
//! This module provides the `CountryFetcher` seam and `ApiClient`, its
//! production implementation. One call issues one GET and decodes the
//! body into `Country` records in server order.

pub mod client;
pub mod error;

pub use client::{decode_countries, ApiClient, CountryFetcher, DEFAULT_COUNTRIES_URL};
pub use error::ApiError;
