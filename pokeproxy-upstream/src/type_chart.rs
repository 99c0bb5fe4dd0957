use ahash::{
    HashMap,
    HashMapExt,
};
use log::warn;
use pokeproxy_data::{
    ResourceRef,
    TypeChart,
    TypeEffectiveness,
    TypeTable,
};

use crate::raw::RawType;

/// Builds a complete type chart from the type listing and the per-type records that loaded.
///
/// Every listed type gets a row against every listed type, defaulting to normal effectiveness.
/// Declared relations are then applied in order: double damage, half damage, no damage. A listed
/// type whose record failed to load keeps a row of normal effectiveness.
pub fn build_type_chart(listed: &[ResourceRef], records: &[RawType]) -> TypeChart {
    let mut known = listed
        .iter()
        .map(|t| t.name.clone())
        .collect::<Vec<_>>();
    for record in records {
        if !known.contains(&record.name) {
            known.push(record.name.clone());
        }
    }

    let mut types = TypeTable::new();
    for attacking in &known {
        let row = known
            .iter()
            .map(|defending| (defending.clone(), TypeEffectiveness::Normal))
            .collect::<HashMap<_, _>>();
        types.insert(attacking.clone(), row);
    }

    for record in records {
        let mut row = HashMap::new();
        let relations = &record.damage_relations;
        for (targets, effectiveness) in [
            (&relations.double_damage_to, TypeEffectiveness::Strong),
            (&relations.half_damage_to, TypeEffectiveness::Weak),
            (&relations.no_damage_to, TypeEffectiveness::None),
        ] {
            for target in targets {
                row.insert(target.name.clone(), effectiveness);
            }
        }
        if let Some(existing) = types.get_mut(&record.name) {
            existing.extend(row);
        }
    }

    for name in &known {
        if !records.iter().any(|record| &record.name == name) {
            warn!("type {name} has no damage relations; treating it as neutral");
        }
    }

    TypeChart::from_filled(types)
}
