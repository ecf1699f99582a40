use serde::{Deserialize, Serialize};

/// Card-sized view of a Pokémon, as shown in lists and search results.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Summary {
    pub id: u32,
    pub name: String,
    /// Type ids in API slot order; the primary type comes first.
    pub types: Vec<String>,
    pub image: String,
}

/// Full view of a single Pokémon for the detail screen.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Detail {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub image: String,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub stats: StatBlock,
    pub abilities: Vec<String>,
    /// Flavor-text description.
    pub species: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatBlock {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl StatBlock {
    pub fn total(&self) -> u32 {
        self.hp
            + self.attack
            + self.defense
            + self.special_attack
            + self.special_defense
            + self.speed
    }
}
