//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised by the response cache.
///
/// A cache miss is not an error; `Cache::get` reports it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The cache could not be built with the given parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The cache has been shut down
    #[error("Cache is closed")]
    Closed,
}

// == Api Error Enum ==
/// Errors raised while fetching and decoding PokeAPI resources.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The response cache rejected the operation
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CacheError::InvalidConfiguration("interval must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: interval must be positive"
        );
        assert_eq!(CacheError::Closed.to_string(), "Cache is closed");

        let err = ApiError::Status {
            url: "https://pokeapi.co/api/v2/pokemon/nope".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "https://pokeapi.co/api/v2/pokemon/nope returned status 404"
        );
    }

    #[test]
    fn test_cache_error_converts_into_api_error() {
        let err: ApiError = CacheError::Closed.into();
        assert!(matches!(err, ApiError::Cache(CacheError::Closed)));
    }
}
