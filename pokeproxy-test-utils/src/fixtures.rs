use ahash::{
    HashMap,
    HashMapExt,
};
use pokeproxy_data::{
    CreatureData,
    DamageClass,
    EffectEntry,
    MoveData,
    ResourceRef,
    Stat,
    StatMap,
    TypeChart,
    TypeEffectiveness,
    TypeTable,
};

/// Builds a creature with base stats given as `[hp, attack, special-attack, speed]`.
pub fn creature(
    id: u32,
    name: &str,
    types: &[&str],
    base_stats: [u32; 4],
    moves: &[&str],
) -> CreatureData {
    let [hp, attack, special_attack, speed] = base_stats;
    CreatureData {
        id,
        name: name.to_owned(),
        stats: StatMap::from_iter([
            (Stat::HP, hp),
            (Stat::Atk, attack),
            (Stat::SpAtk, special_attack),
            (Stat::Spe, speed),
        ]),
        types: types.iter().map(|t| (*t).to_owned()).collect(),
        moves: moves
            .iter()
            .map(|m| ResourceRef {
                name: (*m).to_owned(),
                url: format!("https://pokeapi.co/api/v2/move/{m}/"),
            })
            .collect(),
        species: None,
        sprite: None,
    }
}

/// Builds a move that deals direct damage and has no secondary effect.
pub fn damaging_move(
    name: &str,
    move_type: &str,
    damage_class: DamageClass,
    power: u32,
    accuracy: Option<u32>,
) -> MoveData {
    MoveData {
        id: 0,
        name: name.to_owned(),
        power: Some(power),
        pp: Some(10),
        accuracy,
        priority: 0,
        move_type: move_type.to_owned(),
        damage_class: Some(damage_class),
        effect_entries: vec![EffectEntry {
            effect: "Inflicts regular damage.".to_owned(),
            short_effect: "Inflicts regular damage with no additional effect.".to_owned(),
            language: None,
        }],
        effect_chance: None,
    }
}

/// Builds a move that deals no direct damage, described by the given effect text.
///
/// The move never misses.
pub fn status_move(
    name: &str,
    move_type: &str,
    effect: &str,
    effect_chance: Option<u32>,
) -> MoveData {
    MoveData {
        id: 0,
        name: name.to_owned(),
        power: None,
        pp: Some(10),
        accuracy: None,
        priority: 0,
        move_type: move_type.to_owned(),
        damage_class: Some(DamageClass::Status),
        effect_entries: vec![EffectEntry {
            effect: effect.to_owned(),
            short_effect: effect.to_owned(),
            language: None,
        }],
        effect_chance,
    }
}

/// Builds a type chart from `(attacking, defending, multiplier)` entries.
///
/// Every type mentioned gets a full row of normal effectiveness first.
pub fn type_chart(entries: &[(&str, &str, f64)]) -> TypeChart {
    let mut names = Vec::new();
    for (attacking, defending, _) in entries {
        for name in [attacking, defending] {
            if !names.contains(name) {
                names.push(*name);
            }
        }
    }
    let mut types = TypeTable::new();
    for attacking in &names {
        let mut row = HashMap::new();
        for defending in &names {
            row.insert((*defending).to_owned(), TypeEffectiveness::Normal);
        }
        types.insert((*attacking).to_owned(), row);
    }
    for (attacking, defending, multiplier) in entries {
        if let Some(row) = types.get_mut(*attacking) {
            row.insert(
                (*defending).to_owned(),
                TypeEffectiveness::from(*multiplier),
            );
        }
    }
    TypeChart::from_filled(types)
}
