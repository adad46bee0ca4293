//! PokeAPI models
//!
//! Deserialization targets for the PokeAPI JSON bodies and the
//! domain records built from them.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonResponse, Stats};
