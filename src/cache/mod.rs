//! Cache Module
//!
//! Provides an in-memory response cache whose entries expire after a fixed interval.

mod entry;
mod store;
mod ttl;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use store::CacheStore;
pub use ttl::Cache;
