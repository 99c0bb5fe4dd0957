use serde::{
    Deserialize,
    Serialize,
};

use crate::BattleError;

/// Level used when none is given.
pub const DEFAULT_LEVEL: u32 = 50;
/// Turn budget used when none is given.
pub const DEFAULT_MAX_TURNS: u32 = 200;

/// Options for a single battle simulation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOptions {
    /// Name or ID of the attacking creature, which wins speed ties.
    pub attacker: String,
    /// Name or ID of the defending creature.
    pub defender: String,
    #[serde(default)]
    pub attacker_moves: Option<Vec<String>>,
    #[serde(default)]
    pub defender_moves: Option<Vec<String>>,
    /// Level of both creatures. Must be at least 1.
    #[serde(default)]
    pub level: Option<i64>,
    /// Maximum number of turns before the battle ends in a draw.
    ///
    /// Zero or less ends the battle before the first turn.
    #[serde(default)]
    pub max_turns: Option<i64>,
    /// Seed of the random number generator. A random seed is chosen if unset.
    #[serde(default)]
    pub random_seed: Option<i64>,
}

impl BattleOptions {
    pub fn new<A, D>(attacker: A, defender: D) -> Self
    where
        A: Into<String>,
        D: Into<String>,
    {
        Self {
            attacker: attacker.into(),
            defender: defender.into(),
            ..Default::default()
        }
    }

    /// The level of both creatures, saturated to the range the stat formulas work in.
    pub fn level(&self) -> u32 {
        self.level
            .map_or(DEFAULT_LEVEL, |level| level.clamp(1, u32::MAX as i64) as u32)
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
            .map_or(DEFAULT_MAX_TURNS, |turns| turns.clamp(0, u32::MAX as i64) as u32)
    }

    /// The generator seed. Negative seeds keep their bit pattern.
    pub fn seed(&self) -> Option<u64> {
        self.random_seed.map(|seed| seed as u64)
    }

    pub fn attacker_moves(&self) -> &[String] {
        self.attacker_moves.as_deref().unwrap_or_default()
    }

    pub fn defender_moves(&self) -> &[String] {
        self.defender_moves.as_deref().unwrap_or_default()
    }

    /// Validates the options before any data is loaded.
    pub fn validate(&self) -> Result<(), BattleError> {
        match self.level {
            Some(level) if level < 1 => Err(BattleError::InvalidOptions(format!(
                "level must be at least 1, got {level}"
            ))),
            _ => Ok(()),
        }
    }
}
