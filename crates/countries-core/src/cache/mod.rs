//! In-memory caching module for the country list.
//!
//! This module provides the `CountryStore` seam and `CountryCache`, a
//! single-slot store with exclusive writes and shared reads. Nothing is
//! persisted; the cache starts empty and lives as long as its owner.

pub mod store;

pub use store::{CountryCache, CountryStore};
