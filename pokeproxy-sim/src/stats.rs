use pokeproxy_data::{
    CreatureData,
    Stat,
};

/// Base value used for any stat a creature does not declare.
pub const DEFAULT_BASE_STAT: u32 = 10;

/// Maximum HP at the given level.
pub fn compute_max_hp(base: u32, level: u32) -> u32 {
    let (base, level) = (base as u64, level as u64);
    let hp = (2 * base + 31) * level / 100 + level + 10;
    hp.clamp(1, u32::MAX as u64) as u32
}

/// Value of a non-HP stat at the given level.
pub fn stat_at_level(base: u32, level: u32) -> u32 {
    let (base, level) = (base as u64, level as u64);
    let value = (2 * base + 31) * level / 100 + 5;
    value.clamp(1, u32::MAX as u64) as u32
}

/// Level-scaled stats of a creature, derived once at the start of a battle.
///
/// Defense stats are not modeled: the attacking stat of the same damage class stands in for the
/// target's defense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatStats {
    pub max_hp: u32,
    pub attack: u32,
    pub special_attack: u32,
    pub speed: u32,
}

impl CombatStats {
    pub fn new(creature: &CreatureData, level: u32) -> Self {
        let base = |stat| creature.base_stat(stat).unwrap_or(DEFAULT_BASE_STAT);
        Self {
            max_hp: compute_max_hp(base(Stat::HP), level),
            attack: stat_at_level(base(Stat::Atk), level),
            special_attack: stat_at_level(base(Stat::SpAtk), level),
            speed: stat_at_level(base(Stat::Spe), level),
        }
    }
}
