//! API client for fetching the country list.
//!
//! `ApiClient` issues a single GET against the countries endpoint and
//! decodes the JSON array it returns. There are no retries and no timeout
//! beyond what the underlying HTTP client applies by default.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::models::Country;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Static country list served as a gist.
pub const DEFAULT_COUNTRIES_URL: &str = "https://gist.githubusercontent.com/peymano-wmt/32dcb892b06648910ddd40406e37fdab/raw/db25946fd77c5873b0303b858e861ce724e0dcd0/countries.json";

/// Source of country records.
#[async_trait]
pub trait CountryFetcher: Send + Sync {
    /// Fetch the full country list in server order.
    async fn fetch_countries(&self) -> Result<Vec<Country>, ApiError>;
}

/// Decode a response body into country records, preserving array order.
///
/// Any malformed element fails the whole body.
pub fn decode_countries(body: &[u8]) -> Result<Vec<Country>, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

/// HTTP client for the countries endpoint.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    url: String,
}

impl ApiClient {
    /// Create a client for the default endpoint
    pub fn new() -> Result<Self, ApiError> {
        Self::with_url(DEFAULT_COUNTRIES_URL)
    }

    /// Create a client for a specific endpoint
    pub fn with_url(url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CountryFetcher for ApiClient {
    async fn fetch_countries(&self) -> Result<Vec<Country>, ApiError> {
        debug!(url = %self.url, "Fetching countries");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!(url = %self.url, error = %e, "Countries request failed");
                ApiError::from(e)
            })?;

        let body = response.bytes().await.map_err(|e| {
            warn!(url = %self.url, error = %e, "Failed to read countries response body");
            ApiError::from(e)
        })?;

        let countries = decode_countries(&body).map_err(|e| {
            warn!(url = %self.url, error = %e, "Failed to decode countries response");
            e
        })?;

        debug!(count = countries.len(), "Countries response decoded");
        Ok(countries)
    }
}
