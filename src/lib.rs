//! Pokedex - An interactive shell over the PokeAPI
//!
//! HTTP responses are kept in a time-bounded in-memory cache that a
//! background task sweeps once per interval.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use error::{ApiError, CacheError};
pub use repl::Session;
