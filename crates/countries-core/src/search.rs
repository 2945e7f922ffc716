//! Name/capital search over a country list.

use crate::models::Country;
use crate::utils::contains_ignore_case;

/// Countries whose name or capital contains `query`, ignoring case.
///
/// An empty query returns the whole list. Order is preserved and the query
/// is matched as given, without trimming.
pub fn filter_countries(countries: &[Country], query: &str) -> Vec<Country> {
    if query.is_empty() {
        return countries.to_vec();
    }
    countries
        .iter()
        .filter(|c| contains_ignore_case(&c.name, query) || contains_ignore_case(&c.capital, query))
        .cloned()
        .collect()
}
