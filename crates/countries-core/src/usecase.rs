//! Fetch-and-store use case.
//!
//! Ties a `CountryFetcher` to a `CountryStore`: fetch once, store on success,
//! hand the fresh list back. A failed fetch leaves the store untouched.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::api::{ApiError, CountryFetcher};
use crate::cache::CountryStore;
use crate::models::Country;

#[async_trait]
pub trait FetchCountriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Country>, ApiError>;
}

pub struct FetchCountries {
    fetcher: Arc<dyn CountryFetcher>,
    store: Arc<dyn CountryStore>,
}

impl FetchCountries {
    pub fn new(fetcher: Arc<dyn CountryFetcher>, store: Arc<dyn CountryStore>) -> Self {
        Self { fetcher, store }
    }
}

#[async_trait]
impl FetchCountriesUseCase for FetchCountries {
    async fn execute(&self) -> Result<Vec<Country>, ApiError> {
        let countries = self.fetcher.fetch_countries().await?;
        self.store.set_countries(countries.clone()).await;
        info!(count = countries.len(), "Countries refreshed");
        Ok(countries)
    }
}
