use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::Country;

/// Holder of the most recently fetched country list.
#[async_trait]
pub trait CountryStore: Send + Sync {
    /// Replace the stored list wholesale.
    async fn set_countries(&self, countries: Vec<Country>);

    /// Snapshot of the stored list. Never a partially written one.
    async fn get_countries(&self) -> Arc<Vec<Country>>;

    /// When the list was last replaced. Stores that do not track it return `None`.
    async fn last_updated(&self) -> Option<DateTime<Utc>> {
        None
    }
}

#[derive(Debug, Default)]
struct Slot {
    countries: Arc<Vec<Country>>,
    updated_at: Option<DateTime<Utc>>,
}

/// In-memory country cache.
///
/// Writers take the write lock and swap in a new `Arc`; readers share the
/// read lock and clone the `Arc` out, so a snapshot stays valid after a
/// later write replaces it.
#[derive(Debug, Default)]
pub struct CountryCache {
    slot: RwLock<Slot>,
}

impl CountryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CountryStore for CountryCache {
    async fn set_countries(&self, countries: Vec<Country>) {
        let count = countries.len();
        let mut slot = self.slot.write().await;
        slot.countries = Arc::new(countries);
        slot.updated_at = Some(Utc::now());
        debug!(count, "Country cache replaced");
    }

    async fn get_countries(&self) -> Arc<Vec<Country>> {
        Arc::clone(&self.slot.read().await.countries)
    }

    async fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.slot.read().await.updated_at
    }
}

// ============================================================================
// Tests
// ============================================================================
