//! Payload shapes of the upstream reference API, and their normalization into data objects.
//!
//! Only the fields that are read are declared. A missing required field surfaces as a
//! deserialization error, which the client reports as a shape mismatch.

use core::str::FromStr;

use pokeproxy_data::{
    AbilitySlot,
    CreatureData,
    CreatureProfile,
    DamageClass,
    EffectEntry,
    MoveData,
    ResourceRef,
    Stat,
    StatMap,
};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RawStat {
    pub base_stat: u32,
    pub stat: ResourceRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeSlot {
    #[serde(rename = "type")]
    pub type_ref: ResourceRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAbilitySlot {
    pub ability: ResourceRef,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMoveSlot {
    #[serde(rename = "move")]
    pub move_ref: ResourceRef,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSprites {
    pub front_default: Option<String>,
}

/// A `pokemon/{name_or_id}` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    pub stats: Vec<RawStat>,
    pub types: Vec<RawTypeSlot>,
    #[serde(default)]
    pub abilities: Vec<RawAbilitySlot>,
    pub moves: Vec<RawMoveSlot>,
    pub species: ResourceRef,
    #[serde(default)]
    pub sprites: RawSprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawNamed {
    pub name: String,
}

/// A `move/{name_or_id}` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMove {
    pub id: u32,
    pub name: String,
    pub power: Option<u32>,
    pub pp: Option<u32>,
    pub accuracy: Option<u32>,
    #[serde(default)]
    pub priority: i32,
    #[serde(rename = "type")]
    pub type_ref: RawNamed,
    pub damage_class: Option<RawNamed>,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    pub effect_chance: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawUrl {
    pub url: String,
}

/// A `pokemon-species/{id}` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSpecies {
    pub evolution_chain: Option<RawUrl>,
}

/// A node of an evolution chain.
#[derive(Debug, Clone, Deserialize)]
pub struct RawChainLink {
    pub species: RawNamed,
    #[serde(default)]
    pub evolves_to: Vec<RawChainLink>,
}

/// An `evolution-chain/{id}` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvolutionChain {
    pub chain: RawChainLink,
}

/// The `type` listing payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeList {
    pub results: Vec<ResourceRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDamageRelations {
    #[serde(default)]
    pub double_damage_to: Vec<RawNamed>,
    #[serde(default)]
    pub half_damage_to: Vec<RawNamed>,
    #[serde(default)]
    pub no_damage_to: Vec<RawNamed>,
}

/// A `type/{name}` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RawType {
    pub name: String,
    #[serde(default)]
    pub damage_relations: RawDamageRelations,
}

fn normalize_stats(stats: &[RawStat]) -> StatMap<u32> {
    stats
        .iter()
        .filter_map(|stat| {
            Stat::from_str(&stat.stat.name)
                .ok()
                .map(|name| (name, stat.base_stat))
        })
        .collect()
}

/// Normalizes a creature payload into the fields the simulator needs.
pub fn normalize_creature(raw: RawPokemon) -> CreatureData {
    CreatureData {
        id: raw.id,
        stats: normalize_stats(&raw.stats),
        types: raw.types.into_iter().map(|slot| slot.type_ref.name).collect(),
        moves: raw.moves.into_iter().map(|slot| slot.move_ref).collect(),
        species: Some(raw.species),
        sprite: raw.sprites.front_default,
        name: raw.name,
    }
}

/// Normalizes a move payload.
pub fn normalize_move(raw: RawMove) -> MoveData {
    MoveData {
        id: raw.id,
        name: raw.name,
        power: raw.power,
        pp: raw.pp,
        accuracy: raw.accuracy,
        priority: raw.priority,
        move_type: raw.type_ref.name,
        damage_class: raw
            .damage_class
            .and_then(|class| DamageClass::from_str(&class.name).ok()),
        effect_entries: raw.effect_entries,
        effect_chance: raw.effect_chance,
    }
}

/// Flattens an evolution chain depth-first: a node's species, then each branch in order.
pub fn flatten_evolution_chain(link: &RawChainLink) -> Vec<String> {
    let mut names = Vec::new();
    flatten_into(link, &mut names);
    names
}

fn flatten_into(link: &RawChainLink, names: &mut Vec<String>) {
    names.push(link.species.name.clone());
    for child in &link.evolves_to {
        flatten_into(child, names);
    }
}

/// Normalizes a creature payload into its full profile.
pub fn normalize_profile(raw: RawPokemon, evolution_chain: Vec<String>) -> CreatureProfile {
    CreatureProfile {
        id: raw.id,
        height: raw.height,
        weight: raw.weight,
        stats: normalize_stats(&raw.stats),
        types: raw.types.into_iter().map(|slot| slot.type_ref.name).collect(),
        abilities: raw
            .abilities
            .into_iter()
            .map(|slot| AbilitySlot {
                name: slot.ability.name,
                is_hidden: slot.is_hidden,
            })
            .collect(),
        moves: raw.moves.into_iter().map(|slot| slot.move_ref).collect(),
        sprite: raw.sprites.front_default,
        name: raw.name,
        evolution_chain,
    }
}
