//! # pokeproxy-sim
//!
//! A simplified, turn-based battle simulator between two creatures.
//!
//! Each simulation loads both creatures through a [`DataStore`][pokeproxy_data::DataStore],
//! resolves one move per side for the whole battle, and then plays turns until one side faints or
//! the turn budget runs out. Every random decision is drawn from a single seeded
//! [`PseudoRandomNumberGenerator`][pokeproxy_prng::PseudoRandomNumberGenerator], so a battle is
//! fully reproducible from its seed and inputs.

extern crate alloc;

mod battle;
mod damage;
mod error;
mod move_selector;
mod options;
mod simulate;
mod stats;
mod status;

pub use battle::{
    Battle,
    BattleOutcome,
    BattleSide,
};
pub use damage::{
    calc_damage,
    critical_hit_modifier,
    same_type_attack_bonus,
};
pub use error::BattleError;
pub use move_selector::{
    MAX_FALLBACK_CANDIDATES,
    default_move,
    select_move,
};
pub use options::{
    BattleOptions,
    DEFAULT_LEVEL,
    DEFAULT_MAX_TURNS,
};
pub use simulate::{
    simulate_battle,
    simulate_battle_with_prng,
};
pub use stats::{
    CombatStats,
    DEFAULT_BASE_STAT,
    compute_max_hp,
    stat_at_level,
};
pub use status::{
    StatusKind,
    apply_status_chance,
    detect_status_from_move,
};
