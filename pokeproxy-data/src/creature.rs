use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Stat,
    StatMap,
};

/// A named reference to another upstream resource.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Data about a creature, normalized to the fields the simulator needs.
///
/// A loaded creature is an immutable snapshot for the duration of a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureData {
    pub id: u32,
    pub name: String,
    /// Base stats, keyed by stat.
    pub stats: StatMap<u32>,
    /// One or two type names, primary type first.
    pub types: Vec<String>,
    /// Known moves in learn order.
    pub moves: Vec<ResourceRef>,
    #[serde(default)]
    pub species: Option<ResourceRef>,
    #[serde(default)]
    pub sprite: Option<String>,
}

impl CreatureData {
    /// Returns the base value of a stat, if the creature declares it.
    pub fn base_stat(&self, stat: Stat) -> Option<u32> {
        self.stats.get(&stat).copied()
    }

    /// Whether the creature has the given type.
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }

    /// The primary type of the creature.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(|t| t.as_str())
    }
}

/// An ability slot of a creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub name: String,
    pub is_hidden: bool,
}

/// The full, display-oriented record of a creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureProfile {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub stats: StatMap<u32>,
    pub types: Vec<String>,
    pub abilities: Vec<AbilitySlot>,
    pub moves: Vec<ResourceRef>,
    pub sprite: Option<String>,
    /// Species names of the evolution chain, flattened depth-first.
    pub evolution_chain: Vec<String>,
}
