//! Configuration Module
//!
//! Handles loading the Pokedex configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Pokedex configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL and sweep period in seconds
    pub cache_interval: u64,
    /// Base URL of the PokeAPI, without trailing slash
    pub api_base_url: String,
    /// HTTP request timeout in seconds
    pub request_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_INTERVAL` - Cache TTL in seconds (default: 60)
    /// - `POKEDEX_API_BASE_URL` - PokeAPI base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_REQUEST_TIMEOUT` - HTTP timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_interval: env::var("POKEDEX_CACHE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_interval),
            api_base_url: env::var("POKEDEX_API_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            request_timeout: env::var("POKEDEX_REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout),
        }
    }

    /// Cache interval as a `Duration`.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: 60,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_interval, 60);
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.cache_interval(), Duration::from_secs(60));
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the env so parallel tests cannot race on it
        env::remove_var("POKEDEX_CACHE_INTERVAL");
        env::remove_var("POKEDEX_API_BASE_URL");
        env::remove_var("POKEDEX_REQUEST_TIMEOUT");

        let config = Config::from_env();
        assert_eq!(config.cache_interval, 60);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout, 10);

        env::set_var("POKEDEX_CACHE_INTERVAL", "5");
        env::set_var("POKEDEX_API_BASE_URL", "http://localhost:8080/api/");
        env::set_var("POKEDEX_REQUEST_TIMEOUT", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.cache_interval, 5);
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.request_timeout, 10);

        env::remove_var("POKEDEX_CACHE_INTERVAL");
        env::remove_var("POKEDEX_API_BASE_URL");
        env::remove_var("POKEDEX_REQUEST_TIMEOUT");
    }
}
