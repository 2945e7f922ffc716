//! Application controller for the country list.
//!
//! `AppController` is what a front end talks to: it triggers refreshes and
//! reads the cached list back, optionally filtered by a search query.

use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::api::{ApiClient, ApiError, CountryFetcher};
use crate::cache::{CountryCache, CountryStore};
use crate::config::Config;
use crate::models::{Country, CountryRow};
use crate::search::filter_countries;
use crate::usecase::{FetchCountries, FetchCountriesUseCase};
use crate::utils::format_age;

/// Entry point for front ends.
/// Clone is cheap - both collaborators are shared behind `Arc`.
#[derive(Clone)]
pub struct AppController {
    store: Arc<dyn CountryStore>,
    use_case: Arc<dyn FetchCountriesUseCase>,
}

impl AppController {
    /// Wire the HTTP client and in-memory cache for the configured endpoint.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = ApiClient::with_url(config.endpoint())?;
        Ok(Self::with_parts(
            Arc::new(CountryCache::new()),
            Arc::new(client),
        ))
    }

    pub fn with_parts(store: Arc<dyn CountryStore>, fetcher: Arc<dyn CountryFetcher>) -> Self {
        let use_case = Arc::new(FetchCountries::new(fetcher, Arc::clone(&store)));
        Self { store, use_case }
    }

    /// Spawn one refresh on the runtime.
    ///
    /// The handle resolves to the number of countries stored. Dropping it
    /// detaches the task; the fetch still runs to completion.
    pub fn refresh(&self) -> JoinHandle<Result<usize, ApiError>> {
        let this = self.clone();
        tokio::spawn(async move { this.refresh_now().await })
    }

    /// Refresh inline. On failure the previously cached list stays visible.
    pub async fn refresh_now(&self) -> Result<usize, ApiError> {
        match self.use_case.execute().await {
            Ok(countries) => {
                info!(count = countries.len(), "Country list updated");
                Ok(countries.len())
            }
            Err(e) => {
                warn!(error = %e, "Error fetching countries");
                Err(e)
            }
        }
    }

    /// Current cached list.
    pub async fn countries(&self) -> Arc<Vec<Country>> {
        self.store.get_countries().await
    }

    /// Age of the cached list for display, "never" before the first refresh.
    pub async fn last_updated_display(&self) -> String {
        match self.store.last_updated().await {
            Some(at) => format_age(at, Utc::now()),
            None => "never".to_string(),
        }
    }

    /// Cached countries matching `query` by name or capital.
    pub async fn search(&self, query: &str) -> Vec<Country> {
        filter_countries(&self.countries().await, query)
    }

    /// Display rows for the countries matching `query`.
    pub async fn rows(&self, query: &str) -> Vec<CountryRow> {
        self.search(query).await.iter().map(CountryRow::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    fn country(name: &str, region: &str, code: &str, capital: &str) -> Country {
        Country {
            name: name.to_string(),
            region: region.to_string(),
            code: code.to_string(),
            capital: capital.to_string(),
        }
    }

    fn sample() -> Vec<Country> {
        vec![
            country("Spain", "EU", "ES", "Madrid"),
            country("Italy", "EU", "IT", "Rome"),
        ]
    }

    /// Serves `sample()` until `fail` is set.
    #[derive(Default)]
    struct StubFetcher {
        fail: AtomicBool,
    }

    #[async_trait]
    impl CountryFetcher for StubFetcher {
        async fn fetch_countries(&self) -> Result<Vec<Country>, ApiError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(serde_json::from_str::<Vec<Country>>("[{}]").unwrap_err().into());
            }
            Ok(sample())
        }
    }

    fn controller() -> (AppController, Arc<StubFetcher>) {
        let fetcher = Arc::new(StubFetcher::default());
        let app = AppController::with_parts(Arc::new(CountryCache::new()), fetcher.clone());
        (app, fetcher)
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let (app, _) = controller();
        assert!(app.countries().await.is_empty());
        assert!(app.search("").await.is_empty());
        assert_eq!(app.last_updated_display().await, "never");
    }

    #[tokio::test]
    async fn test_refresh_handle_then_read() {
        let (app, _) = controller();

        let count = app
            .refresh()
            .await
            .expect("refresh task panicked")
            .expect("refresh should succeed");

        assert_eq!(count, 2);
        assert_eq!(*app.countries().await, sample());
        assert_eq!(app.last_updated_display().await, "just now");
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_data() {
        let (app, fetcher) = controller();
        app.refresh_now().await.expect("first refresh should succeed");

        fetcher.fail.store(true, Ordering::SeqCst);
        let err = app.refresh_now().await.unwrap_err();

        assert!(err.is_decode());
        assert_eq!(*app.countries().await, sample());
        assert_eq!(app.search("rome").await.len(), 1);
    }

    #[tokio::test]
    async fn test_search_and_rows() {
        let (app, _) = controller();
        app.refresh_now().await.expect("refresh should succeed");

        assert_eq!(app.search("").await, sample());
        assert_eq!(app.search("SPAIN").await, vec![sample()[0].clone()]);
        assert!(app.search("xyz").await.is_empty());

        let rows = app.rows("mad").await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name_region_code_line, "Spain, EU\t\tES");
        assert_eq!(rows[0].capital_line, "Madrid");
    }

    #[tokio::test]
    async fn test_clones_share_cache() {
        let (app, _) = controller();
        let other = app.clone();

        app.refresh_now().await.expect("refresh should succeed");

        assert_eq!(other.countries().await.len(), 2);
    }

    #[test]
    fn test_new_from_config() {
        let config = Config {
            countries_url: Some("http://127.0.0.1:9/countries.json".to_string()),
        };
        assert!(AppController::new(&config).is_ok());
    }
}
