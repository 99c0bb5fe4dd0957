use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::ResourceRef;

/// The damage class of a move, which determines the stat pair used for damage.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum DamageClass {
    #[string = "physical"]
    Physical,
    #[string = "special"]
    Special,
    /// Deals no direct damage.
    #[string = "status"]
    #[alias = "other"]
    Status,
}

/// Descriptive text of a move's effect.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectEntry {
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub short_effect: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<ResourceRef>,
}

/// Data about a particular move, normalized from the reference data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: u32,
    pub name: String,
    /// Base power; [`None`] for moves that deal no direct damage.
    pub power: Option<u32>,
    pub pp: Option<u32>,
    /// Base accuracy in percent; [`None`] for moves that always hit.
    pub accuracy: Option<u32>,
    #[serde(default)]
    pub priority: i32,
    #[serde(rename = "type")]
    pub move_type: String,
    pub damage_class: Option<DamageClass>,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    /// Chance, in percent, of the move's secondary effect triggering.
    pub effect_chance: Option<u32>,
}

impl MoveData {
    /// Base power, treating "no direct damage" as zero.
    pub fn base_power(&self) -> u32 {
        self.power.unwrap_or(0)
    }

    /// Whether the move deals direct physical or special damage.
    pub fn is_damaging(&self) -> bool {
        self.base_power() > 0
            && matches!(
                self.damage_class,
                Some(DamageClass::Physical | DamageClass::Special)
            )
    }

    /// All effect text of the move, joined by spaces.
    pub fn effect_text(&self) -> String {
        self.effect_entries
            .iter()
            .map(|entry| format!("{} {}", entry.effect, entry.short_effect))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
