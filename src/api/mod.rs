//! API Module
//!
//! Cache-first client for the PokeAPI.
//!
//! # Endpoints
//! - `GET /location-area` - Paginated list of location areas
//! - `GET /location-area/{name}` - Pokemon encounters in one area
//! - `GET /pokemon/{name}` - Details of one pokemon

pub mod client;

pub use client::PokeApiClient;
