//! PokeAPI Client
//!
//! Fetches PokeAPI resources through the response cache. Cache keys are the
//! fully-qualified request URLs, so one key maps to one remote resource.

use bytes::Bytes;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::ApiError;
use crate::models::{LocationArea, LocationAreaPage, Pokemon, PokemonResponse};

/// Client for the PokeAPI that consults the cache before the network.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    cache: Cache,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client from configuration, sharing `cache`.
    pub fn new(cache: Cache, config: &Config) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_http_client(cache, &config.api_base_url, http))
    }

    /// Creates a client with a custom HTTP client and base URL.
    pub fn with_http_client(cache: Cache, base_url: &str, http: Client) -> Self {
        Self {
            http,
            cache,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The cache backing this client.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// URL of the first location-area page.
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    /// URL of a single location area.
    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    /// URL of a single pokemon.
    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    // == Fetch ==
    /// Returns the body at `url`, from the cache when possible.
    ///
    /// On a miss the body is fetched live and stored under `url`. Only
    /// successful responses are cached. Nothing is retried. The returned
    /// buffer is shared with the cache entry.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, ApiError> {
        if let Some(body) = self.cache.get(url)? {
            debug!("Cache hit for {}", url);
            return Ok(body);
        }

        debug!("Cache miss for {}, fetching", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.clone())?;
        Ok(body)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Resources ==
    /// Fetches a page of location areas; `None` fetches the first page.
    pub async fn location_areas(&self, url: Option<&str>) -> Result<LocationAreaPage, ApiError> {
        let url = match url {
            Some(url) => url.to_string(),
            None => self.location_areas_url(),
        };
        self.fetch_json(&url).await
    }

    /// Fetches one location area by name.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea, ApiError> {
        self.fetch_json(&self.location_area_url(name)).await
    }

    /// Fetches one pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon, ApiError> {
        let response: PokemonResponse = self.fetch_json(&self.pokemon_url(name)).await?;
        Ok(response.into())
    }
}

/// Builds an HTTP client that ignores system proxies, for talking to loopback servers.
#[cfg(test)]
pub(crate) fn direct_http_client() -> Client {
    Client::builder()
        .no_proxy()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap()
}
