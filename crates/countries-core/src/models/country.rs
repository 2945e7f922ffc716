//! Country records as served by the countries endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single country entry.
///
/// Constructed by decoding the remote payload and never mutated afterwards.
/// `code` is kept as an opaque string; the endpoint mixes ISO-style codes
/// and free-form tags, so no validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub region: String,
    pub code: String,
    pub capital: String,
}

/// Two-line display form of a country, as shown in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    pub name_region_code_line: String,
    pub capital_line: String,
}

impl From<&Country> for CountryRow {
    fn from(country: &Country) -> Self {
        Self {
            name_region_code_line: format!(
                "{}, {}\t\t{}",
                country.name, country.region, country.code
            ),
            capital_line: country.capital.clone(),
        }
    }
}

impl fmt::Display for CountryRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.name_region_code_line, self.capital_line)
    }
}
