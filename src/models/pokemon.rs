//! Pokemon Models
//!
//! The `GET /pokemon/{name}` response and the flattened record kept in the Pokedex.

use serde::Deserialize;

use super::NamedResource;

// == Wire Types ==
/// Serde view of `GET /pokemon/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResponse {
    pub name: String,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

// == Domain Types ==
/// Base stats of a pokemon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl Stats {
    /// Stores `value` under the field matching the API stat `name`.
    ///
    /// Returns false for names with no matching field.
    pub fn set(&mut self, name: &str, value: u32) -> bool {
        let slot = match name {
            "hp" => &mut self.hp,
            "attack" => &mut self.attack,
            "defense" => &mut self.defense,
            "special-attack" => &mut self.special_attack,
            "special-defense" => &mut self.special_defense,
            "speed" => &mut self.speed,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Stat names and values in display order.
    pub fn entries(&self) -> [(&'static str, u32); 6] {
        [
            ("hp", self.hp),
            ("attack", self.attack),
            ("defense", self.defense),
            ("special-attack", self.special_attack),
            ("special-defense", self.special_defense),
            ("speed", self.speed),
        ]
    }
}

/// A pokemon as stored in the user's Pokedex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub name: String,
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    pub stats: Stats,
    pub types: Vec<String>,
}

impl Pokemon {
    // == Catch Chance ==
    /// Percent chance (0..=100) that a throw catches this pokemon.
    ///
    /// Every 8 points of base experience cost one percent.
    pub fn catch_chance(&self) -> u32 {
        100u32.saturating_sub(self.base_experience / 8)
    }
}

impl From<PokemonResponse> for Pokemon {
    fn from(response: PokemonResponse) -> Self {
        let mut stats = Stats::default();
        for slot in &response.stats {
            stats.set(&slot.stat.name, slot.base_stat);
        }

        Self {
            name: response.name,
            base_experience: response.base_experience.unwrap_or_default(),
            height: response.height,
            weight: response.weight,
            stats,
            types: response.types.into_iter().map(|slot| slot.kind.name).collect(),
        }
    }
}
