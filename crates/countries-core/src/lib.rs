//! Countries core library.
//!
//! Fetches a static country list from a remote JSON endpoint, keeps the
//! latest copy in memory, and answers name/capital searches against it.
//!
//! - `api`: `CountryFetcher` and the reqwest-backed `ApiClient`
//! - `cache`: `CountryStore` and the in-memory `CountryCache`
//! - `usecase`: `FetchCountries`, which fetches and then stores
//! - `search`: case-insensitive filtering by name or capital
//! - `app`: `AppController`, the front-end facing entry point

pub mod api;
pub mod app;
pub mod cache;
pub mod config;
pub mod models;
pub mod search;
pub mod usecase;
pub mod utils;

pub use api::{ApiClient, ApiError, CountryFetcher};
pub use app::AppController;
pub use cache::{CountryCache, CountryStore};
pub use config::Config;
pub use models::{Country, CountryRow};
pub use search::filter_countries;
pub use usecase::{FetchCountries, FetchCountriesUseCase};
